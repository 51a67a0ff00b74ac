//! End-to-end runs of the aggregated signing protocol through the public
//! API only, the way an integrating wallet would drive it.

use corvus_codec::{CancelLeasePayload, PaymentPayload, TxPayload};
use corvus_crypto::{
    aggregate_nonce, aggregate_public_key, combine, sign, verify, verify_payload_aggregated,
    CryptoError, CurveError, KeyPair, Participant, PartialSignature,
};
use corvus_types::{Address, ChainId, CANCEL_LEASE_FEE, FEE_SCALE, PAYMENT_FEE};

fn decode_secret(s: &str) -> [u8; 32] {
    let bytes = bs58::decode(s).into_vec().expect("test secret decodes");
    bytes.as_slice().try_into().expect("test secret is 32 bytes")
}

#[test]
fn single_participant_matches_plain_signing() {
    // account-generated secrets are clamped, which is the case where the
    // lone-participant aggregate must be byte-identical to a plain
    // signature
    let kp = KeyPair::from_account_seed(b"satellite umbrella tide");
    let msg = b"test";
    let rand = [42u8; 64];

    let participant = Participant::new(*kp.secret());
    let roster = [participant.contribution()];
    let union_r = aggregate_nonce(&[participant.nonce_point(msg, &rand)]).unwrap();
    let partial = participant
        .partial_sign(msg, &rand, &roster, &union_r)
        .unwrap();
    let combined = combine(&union_r, &roster, &[partial]).unwrap();

    assert_eq!(combined, sign(kp.secret(), msg, &rand));
    assert_eq!(aggregate_public_key(&roster).unwrap(), *kp.public());
    assert!(verify(kp.public(), msg, &combined));
}

#[test]
fn two_party_signature_verifies_under_the_joint_key() {
    let s1 = decode_secret("EV9ADJzYKZpk4MjxEkXxDSfRRSzBFnA9LEQNbepKZRFc");
    let s2 = decode_secret("3hQRGJkqKFbks77cZ12ugHxDtbweH3EZjhfVzfr4RqPs");
    let msg = b"test";
    let rand1 = [1u8; 64];
    let rand2 = [2u8; 64];

    let p1 = Participant::new(s1);
    let p2 = Participant::new(s2);
    let roster = [p1.contribution(), p2.contribution()];

    let union_r = aggregate_nonce(&[
        p1.nonce_point(msg, &rand1),
        p2.nonce_point(msg, &rand2),
    ])
    .unwrap();

    let part1 = p1.partial_sign(msg, &rand1, &roster, &union_r).unwrap();
    let part2 = p2.partial_sign(msg, &rand2, &roster, &union_r).unwrap();

    // shares cross a wire in real deployments
    let part2 = PartialSignature::from_bytes(&part2.to_bytes()).unwrap();

    let sig = combine(&union_r, &roster, &[part1, part2]).unwrap();
    let joint = aggregate_public_key(&roster).unwrap();
    assert!(verify(&joint, msg, &sig));

    let mut tampered = sig;
    tampered[10] ^= 0x01;
    assert!(!verify(&joint, msg, &tampered));

    let mut other_msg = *msg;
    other_msg[0] ^= 0x01;
    assert!(!verify(&joint, &other_msg, &sig));
}

#[test]
fn roster_order_changes_the_joint_key() {
    let p1 = Participant::new(decode_secret(
        "EV9ADJzYKZpk4MjxEkXxDSfRRSzBFnA9LEQNbepKZRFc",
    ));
    let p2 = Participant::new(decode_secret(
        "3hQRGJkqKFbks77cZ12ugHxDtbweH3EZjhfVzfr4RqPs",
    ));

    let forward = [p1.contribution(), p2.contribution()];
    let reversed = [p2.contribution(), p1.contribution()];
    assert_ne!(
        aggregate_public_key(&forward).unwrap(),
        aggregate_public_key(&reversed).unwrap()
    );
}

#[test]
fn three_party_ceremony_also_verifies() {
    let kps = [
        KeyPair::from_account_seed(b"first holder"),
        KeyPair::from_account_seed(b"second holder"),
        KeyPair::from_account_seed(b"third holder"),
    ];
    let participants: Vec<Participant> =
        kps.iter().map(|kp| Participant::new(*kp.secret())).collect();
    let msg = b"rotate the treasury key";
    let rands = [[11u8; 64], [22u8; 64], [33u8; 64]];

    let roster: Vec<[u8; 32]> = participants.iter().map(|p| p.contribution()).collect();
    let nonce_points: Vec<[u8; 32]> = participants
        .iter()
        .zip(&rands)
        .map(|(p, rand)| p.nonce_point(msg, rand))
        .collect();
    let union_r = aggregate_nonce(&nonce_points).unwrap();

    let partials: Vec<PartialSignature> = participants
        .iter()
        .zip(&rands)
        .map(|(p, rand)| p.partial_sign(msg, rand, &roster, &union_r).unwrap())
        .collect();

    let sig = combine(&union_r, &roster, &partials).unwrap();
    let joint = aggregate_public_key(&roster).unwrap();
    assert!(verify(&joint, msg, &sig));

    // a missing share leaves a signature that cannot verify
    let short = combine(&union_r, &roster, &partials[..2]).unwrap();
    assert!(!verify(&joint, msg, &short));
}

#[test]
fn aggregated_sessions_verify_payloads_end_to_end() {
    let p1 = Participant::new(decode_secret(
        "EV9ADJzYKZpk4MjxEkXxDSfRRSzBFnA9LEQNbepKZRFc",
    ));
    let p2 = Participant::new(decode_secret(
        "3hQRGJkqKFbks77cZ12ugHxDtbweH3EZjhfVzfr4RqPs",
    ));
    let payload = TxPayload::Payment(PaymentPayload {
        timestamp: 1_700_000_000_000_000_000,
        amount: 250_000_000,
        fee: PAYMENT_FEE,
        fee_scale: FEE_SCALE,
        recipient: Address::from_public_key(&[6u8; 32], ChainId::Testnet),
        attachment: "treasury payout".to_string(),
    });
    let msg = payload.to_sign_bytes().unwrap();
    let rand1 = [5u8; 64];
    let rand2 = [6u8; 64];

    let roster = [p1.contribution(), p2.contribution()];
    let union_r = aggregate_nonce(&[
        p1.nonce_point(&msg, &rand1),
        p2.nonce_point(&msg, &rand2),
    ])
    .unwrap();
    let partials = [
        p1.partial_sign(&msg, &rand1, &roster, &union_r).unwrap(),
        p2.partial_sign(&msg, &rand2, &roster, &union_r).unwrap(),
    ];
    let sig = combine(&union_r, &roster, &partials).unwrap();

    assert!(verify_payload_aggregated(&roster, &payload, &sig).unwrap());

    // a roster that does not aggregate is an error, not a false verdict
    let corrupt = [[0xFF; 32], roster[1]];
    assert_eq!(
        verify_payload_aggregated(&corrupt, &payload, &sig),
        Err(CryptoError::Curve(CurveError::InvalidPoint))
    );

    // so is a payload that does not encode
    let unencodable = TxPayload::CancelLease(CancelLeasePayload {
        fee: CANCEL_LEASE_FEE,
        fee_scale: FEE_SCALE,
        timestamp: 1,
        lease_tx_id: "0OIl".to_string(),
    });
    assert!(matches!(
        verify_payload_aggregated(&roster, &unencodable, &sig),
        Err(CryptoError::Codec(_))
    ));
}
