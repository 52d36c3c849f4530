use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raptorfec::{Decoder, Encoder, FecError, Symbol};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn patterned_source(k: usize, t: usize) -> Vec<Vec<u8>> {
    (0..k)
        .map(|i| (0..t).map(|j| (i * 29 + j * 7 + 5) as u8).collect())
        .collect()
}

fn random_source(k: usize, t: usize, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|_| (0..t).map(|_| rng.gen::<u8>()).collect())
        .collect()
}

fn as_refs(source: &[Vec<u8>]) -> Vec<&[u8]> {
    source.iter().map(|s| s.as_slice()).collect()
}

fn encode(source: &[Vec<u8>], t: usize, overhead: usize) -> Vec<Symbol> {
    let refs = as_refs(source);
    let mut enc = Encoder::new(source.len(), t).unwrap();
    enc.encode(&refs, overhead).unwrap()
}

/// Drops the source positions in `drop`, appends the repairs in `use_reps`,
/// decodes and checks every dropped position recovers bit-for-bit.
fn lose_and_recover(source: &[Vec<u8>], t: usize, drop: &[usize], repairs: &[Symbol]) {
    init_logs();
    let k = source.len();
    let mut payloads: Vec<&[u8]> = Vec::new();
    let mut esis: Vec<u32> = Vec::new();
    for (i, s) in source.iter().enumerate() {
        if !drop.contains(&i) {
            payloads.push(s);
            esis.push(i as u32);
        }
    }
    for r in repairs {
        payloads.push(&r.data);
        esis.push(r.esi);
    }

    let mut dec = Decoder::new(k, t).unwrap();
    dec.decode(&payloads, &esis).unwrap();
    for &x in drop {
        let got = dec.recover(x as u32).unwrap();
        assert_eq!(got.data, source[x], "recovered symbol {} differs", x);
    }
}

#[test]
fn no_loss_round_trip() {
    let source = random_source(8, 16, 1);
    let repairs = encode(&source, 16, 3);
    assert_eq!(repairs.len(), 3);
    lose_and_recover(&source, 16, &[], &[]);
}

#[test]
fn single_loss_single_repair() {
    let source = random_source(4, 8, 2);
    let repairs = encode(&source, 8, 2);
    lose_and_recover(&source, 8, &[1], &repairs[..2]);
}

#[test]
fn loss_recovery_across_block_sizes() {
    for &(k, t, seed) in &[(1usize, 4usize, 3u64), (13, 6, 4), (30, 16, 5), (100, 8, 6)] {
        let source = random_source(k, t, seed);
        let nrep = k / 8 + 2;
        let repairs = encode(&source, t, nrep);
        let lost: Vec<usize> = if k == 1 {
            vec![0]
        } else {
            (0..k).step_by(2).take(nrep).collect()
        };
        lose_and_recover(&source, t, &lost, &repairs[..lost.len()]);
    }
}

#[test]
fn concrete_eight_symbol_scenario() {
    // K=8, T=4, overhead 6, lose source 2 and 5 plus one repair
    let source = random_source(8, 4, 7);
    let repairs = encode(&source, 4, 6);
    let kept: Vec<Symbol> = repairs
        .iter()
        .filter(|r| r.esi != 10)
        .cloned()
        .collect();
    assert_eq!(kept.len(), 5);

    let mut payloads: Vec<&[u8]> = Vec::new();
    let mut esis: Vec<u32> = Vec::new();
    for (i, s) in source.iter().enumerate() {
        if i != 2 && i != 5 {
            payloads.push(s);
            esis.push(i as u32);
        }
    }
    for r in &kept {
        payloads.push(&r.data);
        esis.push(r.esi);
    }
    assert_eq!(payloads.len(), 11);

    let mut dec = Decoder::new(8, 4).unwrap();
    dec.decode(&payloads, &esis).unwrap();
    assert_eq!(dec.recover(2).unwrap().data, source[2]);
    assert_eq!(dec.recover(5).unwrap().data, source[5]);
}

#[test]
fn golden_repair_vectors() {
    // pinned output for a fixed source pattern; guards the tuple generator,
    // matrix construction and solver against silent drift
    let source = patterned_source(8, 4);
    let repairs = encode(&source, 4, 6);
    let expected = [
        "90fe53eb", "792ee940", "09d61246", "1cbcd126", "2a71cf18", "3340d7ab",
    ];
    for (r, want) in repairs.iter().zip(expected) {
        assert_eq!(hex::encode(&r.data), want);
    }
}

#[test]
fn golden_recovery_vectors() {
    let source = patterned_source(8, 4);
    let repairs = encode(&source, 4, 6);
    let kept: Vec<Symbol> = repairs.iter().filter(|r| r.esi != 10).cloned().collect();

    let mut payloads: Vec<&[u8]> = Vec::new();
    let mut esis: Vec<u32> = Vec::new();
    for (i, s) in source.iter().enumerate() {
        if i != 2 && i != 5 {
            payloads.push(s);
            esis.push(i as u32);
        }
    }
    for r in &kept {
        payloads.push(&r.data);
        esis.push(r.esi);
    }
    let mut dec = Decoder::new(8, 4).unwrap();
    dec.decode(&payloads, &esis).unwrap();
    assert_eq!(hex::encode(&dec.recover(2).unwrap().data), "3f464d54");
    assert_eq!(hex::encode(&dec.recover(5).unwrap().data), "969da4ab");
}

#[test]
fn recovery_is_idempotent() {
    let source = random_source(8, 4, 8);
    let repairs = encode(&source, 4, 3);
    let mut payloads: Vec<&[u8]> = Vec::new();
    let mut esis: Vec<u32> = Vec::new();
    for (i, s) in source.iter().enumerate() {
        if i != 3 {
            payloads.push(s);
            esis.push(i as u32);
        }
    }
    payloads.push(&repairs[0].data);
    esis.push(repairs[0].esi);

    let mut dec = Decoder::new(8, 4).unwrap();
    dec.decode(&payloads, &esis).unwrap();
    let first = dec.recover(3).unwrap();
    let second = dec.recover(3).unwrap();
    assert_eq!(first.data, second.data);
    assert_eq!(first.data, source[3]);
}

#[test]
fn insufficient_symbols_rejected() {
    let source = random_source(8, 4, 9);
    let refs = as_refs(&source);
    let esis: Vec<u32> = (0..6).collect();
    let mut dec = Decoder::new(8, 4).unwrap();
    assert_eq!(
        dec.decode(&refs[..6], &esis),
        Err(FecError::InsufficientSymbols { need: 8, got: 6 })
    );
}

#[test]
fn dependent_set_fails_then_retry_succeeds() {
    let source = random_source(8, 4, 10);

    // eight symbols, but two are duplicates: linearly insufficient
    let mut payloads: Vec<&[u8]> = source[..6].iter().map(|s| s.as_slice()).collect();
    payloads.push(&source[0]);
    payloads.push(&source[1]);
    let esis: Vec<u32> = vec![0, 1, 2, 3, 4, 5, 0, 1];
    let mut dec = Decoder::new(8, 4).unwrap();
    assert_eq!(dec.decode(&payloads, &esis), Err(FecError::DecodeFailure));

    // same decoder, full set: must succeed after the failed attempt
    let refs = as_refs(&source);
    let all: Vec<u32> = (0..8).collect();
    dec.decode(&refs, &all).unwrap();
    assert_eq!(dec.recover(7).unwrap().data, source[7]);
}

#[test]
fn repair_only_positions_not_recoverable() {
    let source = random_source(8, 4, 11);
    let repairs = encode(&source, 4, 2);
    let refs = as_refs(&source);
    let esis: Vec<u32> = (0..8).collect();
    let mut dec = Decoder::new(8, 4).unwrap();
    dec.decode(&refs, &esis).unwrap();
    assert_eq!(dec.recover(8), Err(FecError::InvalidIndex));
    assert_eq!(dec.recover(repairs[0].esi), Err(FecError::InvalidIndex));
}
