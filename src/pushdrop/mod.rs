//! PushDrop locking script codec
//!
//! A PushDrop token locks an output to a public key while carrying arbitrary
//! data pushes that are dropped from the stack before script evaluation ends:
//!
//! ```text
//! <locking pubkey> OP_CHECKSIG <field 0> ... <field N> <signature> OP_2DROP ... [OP_DROP]
//! ```
//!
//! The decoder returns the data fields, the trailing signature push and the
//! locking public key. The encoder builds the same layout and is used by the
//! CLI inspector and the tests.

use crate::errors::{DecodeError, DecodeResult};
use bitcoin::opcodes::all::{OP_2DROP, OP_CHECKSIG, OP_DROP, OP_PUSHNUM_NEG1};
use bitcoin::opcodes::Opcode;
use bitcoin::script::{Builder, Instruction, PushBytesBuf};
use bitcoin::{Script, ScriptBuf};

pub mod record;

pub use record::PushDropRecord;

/// Lengths accepted for the locking public key push (compressed / uncompressed)
const COMPRESSED_KEY_LEN: usize = 33;
const UNCOMPRESSED_KEY_LEN: usize = 65;

/// Capability: turn a locking script into a PushDrop record
pub trait ScriptDecoder {
    fn decode(&self, script: &Script) -> DecodeResult<PushDropRecord>;
}

/// Default [`ScriptDecoder`] backed by [`decode`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PushDropDecoder;

impl ScriptDecoder for PushDropDecoder {
    fn decode(&self, script: &Script) -> DecodeResult<PushDropRecord> {
        decode(script)
    }
}

/// Decode a hex-encoded locking script
pub fn decode_hex(script_hex: &str) -> DecodeResult<PushDropRecord> {
    let bytes = hex::decode(script_hex).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
    decode(Script::from_bytes(&bytes))
}

/// Decode a locking script as a PushDrop record
pub fn decode(script: &Script) -> DecodeResult<PushDropRecord> {
    let mut instructions = script.instructions().enumerate();

    let locking_public_key = match next_instruction(&mut instructions)? {
        Some((_, Instruction::PushBytes(bytes)))
            if matches!(bytes.len(), COMPRESSED_KEY_LEN | UNCOMPRESSED_KEY_LEN) =>
        {
            hex::encode(bytes.as_bytes())
        }
        _ => return Err(DecodeError::MissingLockingKey),
    };

    match next_instruction(&mut instructions)? {
        Some((_, Instruction::Op(op))) if op == OP_CHECKSIG => {}
        _ => return Err(DecodeError::MissingChecksig),
    }

    let mut pushes: Vec<Vec<u8>> = Vec::new();
    let mut dropped = false;

    while let Some((position, instruction)) = next_instruction(&mut instructions)? {
        match instruction {
            Instruction::Op(op) if op == OP_DROP || op == OP_2DROP => dropped = true,
            Instruction::PushBytes(bytes) if !dropped => pushes.push(bytes.as_bytes().to_vec()),
            Instruction::Op(op) if !dropped => match small_integer_value(op) {
                Some(value) => pushes.push(vec![value]),
                None => {
                    return Err(DecodeError::UnexpectedOpcode {
                        opcode: op.to_string(),
                        position,
                    })
                }
            },
            // Only drop opcodes may follow the first drop
            Instruction::PushBytes(_) => {
                return Err(DecodeError::UnexpectedOpcode {
                    opcode: "data push".to_string(),
                    position,
                })
            }
            Instruction::Op(op) => {
                return Err(DecodeError::UnexpectedOpcode {
                    opcode: op.to_string(),
                    position,
                })
            }
        }
    }

    if !dropped {
        return Err(DecodeError::MissingDrop);
    }

    let signature = pushes.pop().ok_or(DecodeError::MissingSignature)?;

    Ok(PushDropRecord {
        fields: pushes,
        signature: hex::encode(signature),
        locking_public_key,
    })
}

/// Build a PushDrop locking script from its parts
///
/// `locking_public_key` must be a serialized public key; `signature` is pushed
/// as the last data item. Every pushed item is dropped with `OP_2DROP` pairs
/// and a trailing `OP_DROP` when the count is odd.
pub fn encode(
    locking_public_key: &[u8],
    fields: &[Vec<u8>],
    signature: &[u8],
) -> DecodeResult<ScriptBuf> {
    let mut builder = Builder::new()
        .push_slice(to_push_bytes(locking_public_key)?)
        .push_opcode(OP_CHECKSIG);

    for field in fields.iter().map(Vec::as_slice).chain(std::iter::once(signature)) {
        builder = push_minimal(builder, field)?;
    }

    let pushed = fields.len() + 1;
    for _ in 0..pushed / 2 {
        builder = builder.push_opcode(OP_2DROP);
    }
    if pushed % 2 == 1 {
        builder = builder.push_opcode(OP_DROP);
    }

    Ok(builder.into_script())
}

fn next_instruction<'a, I>(instructions: &mut I) -> DecodeResult<Option<(usize, Instruction<'a>)>>
where
    I: Iterator<Item = (usize, Result<Instruction<'a>, bitcoin::script::Error>)>,
{
    match instructions.next() {
        Some((position, Ok(instruction))) => Ok(Some((position, instruction))),
        Some((_, Err(e))) => Err(DecodeError::Malformed(e.to_string())),
        None => Ok(None),
    }
}

/// Value carried by a minimally-encoded small integer opcode
fn small_integer_value(op: Opcode) -> Option<u8> {
    match op.to_u8() {
        byte @ 0x51..=0x60 => Some(byte - 0x50),
        _ if op == OP_PUSHNUM_NEG1 => Some(0x81),
        _ => None,
    }
}

/// Push a field using the shortest encoding the decoder understands
fn push_minimal(builder: Builder, data: &[u8]) -> DecodeResult<Builder> {
    Ok(match data {
        [value @ 1..=16] => builder.push_opcode(Opcode::from(0x50 + value)),
        [0x81] => builder.push_opcode(OP_PUSHNUM_NEG1),
        _ => builder.push_slice(to_push_bytes(data)?),
    })
}

fn to_push_bytes(data: &[u8]) -> DecodeResult<PushBytesBuf> {
    PushBytesBuf::try_from(data.to_vec()).map_err(|e| DecodeError::Malformed(e.to_string()))
}
