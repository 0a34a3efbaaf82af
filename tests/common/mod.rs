//! Common Test Utilities
//!
//! Builders for signed TSP advertisements and the transactions that carry
//! them, shared by all integration tests.

#![allow(dead_code)]

/// Test fixture utilities
pub mod fixtures {
    use bitcoin::absolute::LockTime;
    use bitcoin::secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
    use bitcoin::transaction::Version;
    use bitcoin::{Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness};
    use tsp_topic_manager::crypto::sha256_digest;
    use tsp_topic_manager::pushdrop;
    use tsp_topic_manager::types::tsp::{TspField, TSP_PROTOCOL_ADDRESS};

    /// Deterministic advertiser key
    pub fn advertiser_key() -> SecretKey {
        SecretKey::from_slice(&[0x42; 32]).unwrap()
    }

    pub fn advertiser_public_key() -> PublicKey {
        PublicKey::from_secret_key(&Secp256k1::new(), &advertiser_key())
    }

    /// Data fields of a well-formed advertisement, in TSP order
    pub fn advert_fields() -> Vec<Vec<u8>> {
        vec![
            advertiser_public_key().serialize().to_vec(),
            TSP_PROTOCOL_ADDRESS.as_bytes().to_vec(),
            b"Night Drive".to_vec(),
            b"The Overlays".to_vec(),
            b"Synth instrumental".to_vec(),
            b"215".to_vec(),
            b"uhrp:XUTGkiW1FjfFh6TWvTrMi4iRyv7Bvx8pD6J5zrNsGbYmgwuHKyg6".to_vec(),
            b"uhrp:XUUnyXZu9P4v7iDRkYfMdpF8pxTbuyJqJzZnMwkyAbiE8qR7i1Zz".to_vec(),
        ]
    }

    /// DER signature by the advertiser over SHA-256 of the concatenated fields
    pub fn sign_fields(fields: &[Vec<u8>]) -> Vec<u8> {
        let digest = sha256_digest(&fields.concat());
        Secp256k1::new()
            .sign_ecdsa(&Message::from_digest(digest), &advertiser_key())
            .serialize_der()
            .to_vec()
    }

    /// PushDrop script locked to the advertiser key
    pub fn token_script(fields: &[Vec<u8>], signature: &[u8]) -> ScriptBuf {
        pushdrop::encode(&advertiser_public_key().serialize(), fields, signature).unwrap()
    }

    /// Correctly signed advertisement script
    pub fn signed_advert_script() -> ScriptBuf {
        let fields = advert_fields();
        let signature = sign_fields(&fields);
        token_script(&fields, &signature)
    }

    /// Advertisement signed first, then altered at `field`
    pub fn tampered_advert_script(field: TspField, value: &[u8]) -> ScriptBuf {
        let mut fields = advert_fields();
        let signature = sign_fields(&fields);
        fields[field.index()] = value.to_vec();
        token_script(&fields, &signature)
    }

    /// Advertisement altered at `field`, then signed
    pub fn resigned_advert_script(field: TspField, value: &[u8]) -> ScriptBuf {
        let mut fields = advert_fields();
        fields[field.index()] = value.to_vec();
        let signature = sign_fields(&fields);
        token_script(&fields, &signature)
    }

    /// Ordinary pay-to-pubkey-hash script
    pub fn p2pkh_script() -> ScriptBuf {
        ScriptBuf::from_bytes(
            hex::decode("76a91489abcdefabbaabbaabbaabbaabbaabbaabbaabba88ac").unwrap(),
        )
    }

    /// Bare OP_RETURN data carrier
    pub fn op_return_script() -> ScriptBuf {
        ScriptBuf::from_bytes(hex::decode("6a0b68656c6c6f20776f726c64").unwrap())
    }

    /// Single-input transaction paying to `scripts` in order
    pub fn transaction_with_outputs(scripts: Vec<ScriptBuf>) -> Transaction {
        transaction(1, scripts)
    }

    pub fn transaction(inputs: usize, scripts: Vec<ScriptBuf>) -> Transaction {
        Transaction {
            version: Version::ONE,
            lock_time: LockTime::ZERO,
            input: (0..inputs)
                .map(|_| TxIn {
                    previous_output: OutPoint::null(),
                    script_sig: ScriptBuf::new(),
                    sequence: Sequence::MAX,
                    witness: Witness::new(),
                })
                .collect(),
            output: scripts
                .into_iter()
                .map(|script_pubkey| TxOut {
                    value: Amount::from_sat(1),
                    script_pubkey,
                })
                .collect(),
        }
    }
}
