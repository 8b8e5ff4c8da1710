use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

// Seeded filler sampling: HMAC-SHA256(seed, "<domain>") -> bytes -> floats in [0,1)
// The stream is extended by re-hashing the previous block once it runs dry.

pub type HmacSha256 = Hmac<Sha256>;

pub struct StripRng {
    block: Vec<u8>,
    cursor: usize,
}

impl StripRng {
    pub fn for_idle(seed: &str, reel: usize) -> Self {
        Self::from_message(seed, &format!("idle:{reel}"))
    }

    /// Stream for `reel` on the spin numbered `nonce`.
    pub fn for_spin(seed: &str, nonce: u64, reel: usize) -> Self {
        Self::from_message(seed, &format!("{nonce}:{reel}"))
    }

    fn from_message(seed: &str, msg: &str) -> Self {
        let mut mac = HmacSha256::new_from_slice(seed.as_bytes()).expect("HMAC key");
        mac.update(msg.as_bytes());
        Self {
            block: mac.finalize().into_bytes().to_vec(),
            cursor: 0,
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        if self.cursor + 4 > self.block.len() {
            self.block = Sha256::digest(&self.block).to_vec();
            self.cursor = 0;
        }
        let chunk = &self.block[self.cursor..self.cursor + 4];
        let v = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        self.cursor += 4;
        (v as f64) / (u32::MAX as f64 + 1.0)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let i = (self.next_f64() * items.len() as f64).floor() as usize;
        &items[i.min(items.len() - 1)]
    }
}
