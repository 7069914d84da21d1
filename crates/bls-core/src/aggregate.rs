// Multi-signature aggregation.
//
// Signatures fold with G1 addition, public keys with G2 addition. The group
// is abelian, so the result does not depend on the order of the inputs.
// Aggregating nothing has no meaning and is rejected rather than returning
// the identity, which would verify against an empty signer set.

use crate::curve::{CurveConfig, JacobianPoint};
use crate::error::{BlsError, Result};
use crate::keypair::{PublicKey, PublicKeyG1};
use crate::sign::Signature;

/// The sum of several signatures on one message.
pub type AggregateSignature = Signature;

/// The sum of several G2 public keys.
pub type AggregatePublicKey = PublicKey;

/// head + rest[0] + rest[1] + ...
///
/// The head is a required argument, so this fold cannot be called on nothing.
/// The slice entry points below split their input with `split_first` and
/// report an empty slice as `EmptyAggregationInput`.
fn fold_points<'a, C, I>(head: &JacobianPoint<C>, rest: I) -> JacobianPoint<C>
where
    C: CurveConfig,
    I: IntoIterator<Item = &'a JacobianPoint<C>>,
{
    rest.into_iter().fold(*head, |acc, p| acc.add(p))
}

fn split_non_empty<T>(items: &[T]) -> Result<(&T, &[T])> {
    items.split_first().ok_or(BlsError::EmptyAggregationInput)
}

pub fn aggregate_signatures(sigs: &[Signature]) -> Result<AggregateSignature> {
    let (first, rest) = split_non_empty(sigs)?;
    Ok(Signature(fold_points(first.point(), rest.iter().map(Signature::point))))
}

pub fn aggregate_public_keys(pubkeys: &[PublicKey]) -> Result<AggregatePublicKey> {
    let (first, rest) = split_non_empty(pubkeys)?;
    Ok(PublicKey(fold_points(first.point(), rest.iter().map(PublicKey::point))))
}

/// G1 key aggregation, for contracts that keep keys in G1 and only check a
/// single G2 key against the aggregate.
pub fn aggregate_public_keys_g1(pubkeys: &[PublicKeyG1]) -> Result<PublicKeyG1> {
    let (first, rest) = split_non_empty(pubkeys)?;
    Ok(PublicKeyG1(fold_points(first.point(), rest.iter().map(PublicKeyG1::point))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::{KeyPair, SecretKey};
    use crate::sign::sign;

    fn keypairs(n: u64) -> Vec<KeyPair> {
        (1..=n)
            .map(|i| KeyPair::from_secret_key(SecretKey::from_u64(1000 + i).unwrap()))
            .collect()
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(aggregate_signatures(&[]), Err(BlsError::EmptyAggregationInput));
        assert_eq!(aggregate_public_keys(&[]), Err(BlsError::EmptyAggregationInput));
        assert_eq!(aggregate_public_keys_g1(&[]), Err(BlsError::EmptyAggregationInput));
    }

    #[test]
    fn single_element_is_identity_fold() {
        let kp = &keypairs(1)[0];
        let sig = sign(&kp.sk, b"msg").unwrap();
        assert_eq!(aggregate_signatures(&[sig]).unwrap(), sig);
        assert_eq!(aggregate_public_keys(&[kp.pk]).unwrap(), kp.pk);
    }

    #[test]
    fn order_independent() {
        let kps = keypairs(4);
        let mut sigs: Vec<Signature> =
            kps.iter().map(|kp| sign(&kp.sk, b"msg").unwrap()).collect();
        let mut pks: Vec<PublicKey> = kps.iter().map(|kp| kp.pk).collect();

        let agg_sig = aggregate_signatures(&sigs).unwrap();
        let agg_pk = aggregate_public_keys(&pks).unwrap();

        sigs.reverse();
        sigs.swap(0, 2);
        pks.rotate_left(3);
        assert_eq!(aggregate_signatures(&sigs).unwrap(), agg_sig);
        assert_eq!(aggregate_public_keys(&pks).unwrap(), agg_pk);
    }

    #[test]
    fn aggregate_key_matches_summed_secret() {
        let kps = keypairs(3);
        let sum = kps.iter().fold(ark_bn254::Fr::from(0u64), |acc, kp| acc + kp.sk.scalar());
        let combined = KeyPair::from_secret_key(SecretKey::from_scalar(sum).unwrap());

        let pks: Vec<PublicKey> = kps.iter().map(|kp| kp.pk).collect();
        let pks_g1: Vec<PublicKeyG1> = kps.iter().map(|kp| kp.pk_g1).collect();
        assert_eq!(aggregate_public_keys(&pks).unwrap(), combined.pk);
        assert_eq!(aggregate_public_keys_g1(&pks_g1).unwrap(), combined.pk_g1);
    }
}
