use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raptorfec::{Decoder, Encoder};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_source(k: usize, t: usize, seed: u64) -> Vec<Vec<u8>> {
    init_logs();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|_| (0..t).map(|_| rng.gen::<u8>()).collect())
        .collect()
}

/// Half the source symbols lost, replaced by repairs with a little headroom.
#[test]
fn recovers_from_fifty_percent_loss() {
    let (k, t) = (20usize, 8usize);
    let source = random_source(k, t, 42);
    let refs: Vec<&[u8]> = source.iter().map(|s| s.as_slice()).collect();
    let mut enc = Encoder::new(k, t).unwrap();
    let repairs = enc.encode(&refs, 12).unwrap();

    let lost: Vec<usize> = (0..k).step_by(2).collect();
    let mut payloads: Vec<&[u8]> = Vec::new();
    let mut esis: Vec<u32> = Vec::new();
    for (i, s) in source.iter().enumerate() {
        if !lost.contains(&i) {
            payloads.push(s);
            esis.push(i as u32);
        }
    }
    for r in &repairs {
        payloads.push(&r.data);
        esis.push(r.esi);
    }

    let mut dec = Decoder::new(k, t).unwrap();
    dec.decode(&payloads, &esis).unwrap();
    for x in lost {
        assert_eq!(dec.recover(x as u32).unwrap().data, source[x]);
    }
}

/// A larger block with substantial loss; exercises the solver well past the
/// toy sizes.
#[test]
fn recovers_large_block() {
    let (k, t) = (250usize, 4usize);
    let source = random_source(k, t, 7);
    let refs: Vec<&[u8]> = source.iter().map(|s| s.as_slice()).collect();
    let mut enc = Encoder::new(k, t).unwrap();
    let repairs = enc.encode(&refs, 32).unwrap();

    let lost: Vec<usize> = (0..60).step_by(2).collect();
    let mut payloads: Vec<&[u8]> = Vec::new();
    let mut esis: Vec<u32> = Vec::new();
    for (i, s) in source.iter().enumerate() {
        if !lost.contains(&i) {
            payloads.push(s);
            esis.push(i as u32);
        }
    }
    for r in &repairs {
        payloads.push(&r.data);
        esis.push(r.esi);
    }

    let mut dec = Decoder::new(k, t).unwrap();
    dec.decode(&payloads, &esis).unwrap();
    for x in lost {
        assert_eq!(dec.recover(x as u32).unwrap().data, source[x]);
    }
}
