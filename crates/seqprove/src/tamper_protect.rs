use sha3::{Digest, Sha3_256};

const SEAL_PREFIX: &[u8] = b"i understand that modifying this proof may lead to incorrect verdicts";

/// Feeds the parts of a state into a SHA3-256 digest.
///
/// Parts are length prefixed, so moving text from one part to the next
/// changes the seal.
pub struct Sealer(Sha3_256);

impl Sealer {
    pub fn new() -> Self {
        let mut hasher = Sha3_256::new();
        hasher.update(SEAL_PREFIX);
        Self(hasher)
    }

    pub fn part(&mut self, part: impl AsRef<[u8]>) -> &mut Self {
        let part = part.as_ref();
        self.0.update((part.len() as u64).to_le_bytes());
        self.0.update(part);
        self
    }

    pub fn flag(&mut self, flag: bool) -> &mut Self {
        self.part([flag as u8])
    }

    /// Upper case hex of the digest.
    pub fn finish(self) -> String {
        self.0
            .finalize()
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect()
    }
}

impl Default for Sealer {
    fn default() -> Self {
        Self::new()
    }
}

pub trait ProtectedState {
    fn feed_seal(&self, sealer: &mut Sealer);

    fn compute_seal(&self) -> String {
        let mut sealer = Sealer::new();
        self.feed_seal(&mut sealer);
        sealer.finish()
    }

    fn verify_seal(&self, seal: &str) -> bool {
        self.compute_seal() == seal
    }
}
