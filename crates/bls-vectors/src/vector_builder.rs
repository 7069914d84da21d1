// Test vectors for the on-chain BLS key registration check.
//
// The contract registers an operator's BLS keys by verifying a signature over
//
//   keccak256(abi.encode(address operator, uint256 pkG1.x, uint256 pkG1.y,
//                        uint256[2] pkG2.x, uint256[2] pkG2.y))
//
// where the uint256[2] pairs are in EIP-197 order (imaginary first). Every
// field is static, so the encoding is seven 32-byte words. A vector carries
// everything the contract test needs and nothing secret.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use bls_core::encoding::{
    g1_from_dec, g1_to_bytes, g1_to_dec, g2_from_dec, g2_to_bytes, g2_to_dec,
};
use bls_core::{
    keccak256, sign, verify, verify_key_consistency, G2CoordinateOrder, KeyPair, PublicKey,
    PublicKeyG1, SecretKey, Signature, VerifyResult,
};

use crate::address::Address;
use crate::error::{Result, VectorError};

/// JSON test vector consumed by the contract test suite. Coordinates are JSON
/// integers, `operator` is EIP-55 checksummed, and `message` is the lowercase
/// hex digest without `0x`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestVector {
    pub operator: String,
    pub public_key_g1: [Number; 2],
    pub public_key_g2: [Number; 4],
    pub message: String,
    pub signature: [Number; 2],
}

/// Decimal coordinate strings as JSON integers.
fn to_json_integers<const N: usize>(words: [String; N]) -> Result<[Number; N]> {
    let mut out: [Number; N] = std::array::from_fn(|_| Number::from(0u8));
    for (slot, word) in out.iter_mut().zip(&words) {
        *slot = word.parse()?;
    }
    Ok(out)
}

fn to_decimal_strings<const N: usize>(numbers: &[Number; N]) -> [String; N] {
    std::array::from_fn(|i| numbers[i].to_string())
}

/// ABI-encoded registration payload (before hashing).
pub fn registration_message(
    operator: &Address,
    pk_g1: &PublicKeyG1,
    pk: &PublicKey,
) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(7 * 32);
    out.extend_from_slice(&operator.abi_word());
    out.extend_from_slice(&g1_to_bytes(pk_g1.point())?);
    out.extend_from_slice(&g2_to_bytes(pk.point())?);
    Ok(out)
}

/// Derive keys from `sk`, sign the registration digest for `operator`, check
/// the signature, and return the vector.
pub fn build_test_vector(
    sk: &SecretKey,
    operator: Address,
    order: G2CoordinateOrder,
) -> Result<TestVector> {
    let kp = KeyPair::from_secret_key(sk.clone());

    let payload = registration_message(&operator, &kp.pk_g1, &kp.pk)?;
    let digest = keccak256(&payload);
    log::info!("registration digest: {}", hex::encode(digest));

    let sig = sign(&kp.sk, &digest)?;
    if !verify(&digest, &sig, &kp.pk)?.is_valid() {
        return Err(VectorError::SelfCheckFailed);
    }

    Ok(TestVector {
        operator: operator.to_string(),
        public_key_g1: to_json_integers(g1_to_dec(kp.pk_g1.point())?)?,
        public_key_g2: to_json_integers(g2_to_dec(kp.pk.point(), order)?)?,
        message: hex::encode(digest),
        signature: to_json_integers(g1_to_dec(sig.point())?)?,
    })
}

/// Write a vector as pretty JSON, creating parent directories.
pub fn export_test_vector(vector: &TestVector, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(vector)?;
    fs::write(output_path, json)?;
    Ok(())
}

pub fn load_test_vector(path: &Path) -> Result<TestVector> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Check a vector the way the contract does: the digest must match the
/// operator and keys it claims to cover, the two public keys must share a
/// secret, and the signature must verify under the G2 key.
pub fn check_test_vector(vector: &TestVector, order: G2CoordinateOrder) -> Result<VerifyResult> {
    let operator: Address = vector.operator.parse()?;
    let pk_g1 = PublicKeyG1(g1_from_dec(&to_decimal_strings(&vector.public_key_g1))?);
    let pk = PublicKey(g2_from_dec(&to_decimal_strings(&vector.public_key_g2), order)?);
    let sig = Signature(g1_from_dec(&to_decimal_strings(&vector.signature))?);
    let message = hex::decode(vector.message.trim_start_matches("0x"))?;

    let expected = keccak256(&registration_message(&operator, &pk_g1, &pk)?);
    if message != expected {
        return Err(VectorError::MessageMismatch);
    }

    if !verify_key_consistency(&pk_g1, &pk)?.is_valid() {
        log::warn!("G1 and G2 public keys in vector do not share a secret");
        return Ok(VerifyResult::Invalid);
    }

    Ok(verify(&message, &sig, &pk)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn operator() -> Address {
        Address([0x11; 20])
    }

    fn sk69() -> SecretKey {
        SecretKey::from_u64(69).unwrap()
    }

    #[test]
    fn registration_message_layout() {
        let kp = KeyPair::from_secret_key(sk69());
        let msg = registration_message(&operator(), &kp.pk_g1, &kp.pk).unwrap();
        assert_eq!(msg.len(), 224);
        assert_eq!(msg[..12], [0u8; 12]);
        assert_eq!(msg[12..32], [0x11; 20]);
    }

    #[test]
    fn secret_key_69_known_vector() {
        let v = build_test_vector(&sk69(), operator(), G2CoordinateOrder::ImaginaryFirst).unwrap();
        assert_eq!(v.operator, "0x1111111111111111111111111111111111111111");
        assert_eq!(
            v.message,
            "f87c689b5eadfc114fe407ec4aff0601a4af9780fce2bde30cbcfed77e476e5f"
        );
        assert_eq!(
            to_decimal_strings(&v.public_key_g2),
            [
                "5334410886741819556325359147377682006012228123419628681352847439302316235957",
                "19101821850089705274637533855249918363070101489527618151493230256975900223847",
                "4185483097059047421902184823581361466320657066600218863748375739772335928910",
                "354176189041917478648604979334478067325821134838555150300539079146482658331",
            ]
        );
        assert_eq!(
            to_decimal_strings(&v.signature),
            [
                "13243733197202963384013735037965845244303615682761443783339717912083684484114",
                "8924579026651273573969789721287910659451302532704505311038769522085396817641",
            ]
        );
    }

    #[test]
    fn json_has_contract_field_names() {
        let v = build_test_vector(&sk69(), operator(), G2CoordinateOrder::default()).unwrap();
        let json = serde_json::to_value(&v).unwrap();
        let obj = json.as_object().unwrap();

        for key in ["operator", "publicKeyG1", "publicKeyG2", "message", "signature"] {
            assert!(obj.contains_key(key), "missing {key}");
        }

        // Coordinates are JSON integers wider than u64, not strings
        for key in ["publicKeyG1", "publicKeyG2", "signature"] {
            for val in json[key].as_array().unwrap() {
                assert!(val.is_number(), "{key} entry is not a number: {val}");
                val.to_string()
                    .parse::<BigUint>()
                    .unwrap_or_else(|_| panic!("{key} is not a valid integer: {val}"));
            }
        }
    }

    #[test]
    fn json_text_matches_contract_fixture_shape() {
        let v = build_test_vector(&sk69(), operator(), G2CoordinateOrder::default()).unwrap();
        let text = serde_json::to_string(&v).unwrap();
        assert!(text.contains(
            "\"signature\":[13243733197202963384013735037965845244303615682761443783339717912083684484114,"
        ));
        assert!(text.contains("\"operator\":\"0x1111111111111111111111111111111111111111\""));

        let parsed: TestVector = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, v);
    }

    #[test]
    fn all_zero_vector_is_rejected() {
        // Identity keys and signature with a digest that matches them
        let operator = Address([0x42; 20]);
        let pk_g1 = PublicKeyG1(bls_core::G1Point::identity());
        let pk = PublicKey(bls_core::G2Point::identity());
        let digest = keccak256(&registration_message(&operator, &pk_g1, &pk).unwrap());
        let zero = || Number::from(0u8);

        let v = TestVector {
            operator: operator.to_string(),
            public_key_g1: [zero(), zero()],
            public_key_g2: [zero(), zero(), zero(), zero()],
            message: hex::encode(digest),
            signature: [zero(), zero()],
        };
        assert_eq!(
            check_test_vector(&v, G2CoordinateOrder::default()).unwrap(),
            VerifyResult::Invalid
        );
    }

    #[test]
    fn vector_checks_in_both_g2_orders() {
        for order in [G2CoordinateOrder::ImaginaryFirst, G2CoordinateOrder::RealFirst] {
            let v = build_test_vector(&sk69(), operator(), order).unwrap();
            assert_eq!(check_test_vector(&v, order).unwrap(), VerifyResult::Valid);
        }
    }

    #[test]
    fn tampered_vectors_are_caught() {
        let order = G2CoordinateOrder::ImaginaryFirst;
        let v = build_test_vector(&sk69(), operator(), order).unwrap();

        let mut other_operator = v.clone();
        other_operator.operator = Address([0x22; 20]).to_string();
        assert!(matches!(
            check_test_vector(&other_operator, order),
            Err(VectorError::MessageMismatch)
        ));

        // A valid signature by a different key over the same digest
        let mut forged = v.clone();
        let digest = hex::decode(&v.message).unwrap();
        let other = sign(&SecretKey::from_u64(70).unwrap(), &digest).unwrap();
        forged.signature = to_json_integers(g1_to_dec(other.point()).unwrap()).unwrap();
        assert_eq!(check_test_vector(&forged, order).unwrap(), VerifyResult::Invalid);
    }

    #[test]
    fn export_and_load_roundtrip() {
        let operator = Address::random(&mut rand::thread_rng());
        let v = build_test_vector(&sk69(), operator, G2CoordinateOrder::default()).unwrap();
        let path = std::env::temp_dir()
            .join(format!("bls-vectors-{}", std::process::id()))
            .join("blsTestVectors.json");

        export_test_vector(&v, &path).unwrap();
        let loaded = load_test_vector(&path).unwrap();
        assert_eq!(loaded, v);
        assert!(check_test_vector(&loaded, G2CoordinateOrder::default())
            .unwrap()
            .is_valid());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
