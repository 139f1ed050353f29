use std::fmt::Write as _;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform jitter in `[-spread, spread]` around zero.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // name, base price, target multiple, note (quoted: contains a comma,
    // so the sample exercises the quote-aware parser)
    let assets: &[(&str, f64, f64, &str)] = &[
        ("BTC", 65000.0, 1.6, "Digital gold, long horizon"),
        ("ETH", 3400.0, 1.8, "Smart contracts, staking yield"),
        ("SOL", 150.0, 2.2, "High throughput, retail flows"),
        ("GOLD", 2400.0, 1.2, "Inflation hedge, low beta"),
        ("SPX", 5500.0, 1.1, "Broad market, core holding"),
        ("MSTR", 1500.0, 2.5, "Leveraged proxy, high variance"),
    ];

    let mut csv = String::new();
    for (name, base, target_multiple, note) in assets {
        let price = base * (1.0 + rng.jitter(0.05));
        let change = rng.jitter(8.0);
        let market_cap = price * (10_000.0 + rng.next_f64() * 90_000.0);
        let target = price * target_multiple;
        writeln!(
            csv,
            "{name},{price:.2},{change:.2}%,{market_cap:.0},{target:.2},\"{note}\""
        )
        .unwrap();
    }

    let output_path = "dummy_data.csv";
    std::fs::write(output_path, &csv).expect("Failed to write sample CSV");
    println!("Wrote {} assets to {output_path}", assets.len());
}
