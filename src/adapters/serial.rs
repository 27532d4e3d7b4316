use crate::domain::model::{ContainerKind, SerialNumber};
use crate::domain::ports::SerialNumberSource;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_PREFIX: &str = "KON";
pub const DEFAULT_SUFFIX_LENGTH: usize = 4;

fn format_serial(prefix: &str, kind: ContainerKind, suffix: &str) -> SerialNumber {
    SerialNumber::new(format!("{}-{}-{}", prefix, kind.tag(), suffix))
}

const SUFFIX_ALPHABET_SIZE: usize = 62;

/// Number of distinct suffixes of `length` alphanumeric characters.
fn suffix_space(length: usize) -> usize {
    u32::try_from(length)
        .ok()
        .and_then(|exp| SUFFIX_ALPHABET_SIZE.checked_pow(exp))
        .unwrap_or(usize::MAX)
}

/// `KON-L-7fQ2` style serials with a random alphanumeric suffix.
///
/// Every serial handed out is remembered, and a colliding draw is simply
/// redrawn, so uniqueness holds exactly for the generator's lifetime. Once a
/// kind has used every suffix of the current length, the suffix grows by one
/// character.
#[derive(Debug)]
pub struct RandomSerialGenerator {
    prefix: String,
    suffix_length: usize,
    rng: StdRng,
    issued: HashSet<SerialNumber>,
    issued_per_length: HashMap<(ContainerKind, usize), usize>,
}

impl RandomSerialGenerator {
    pub fn new(prefix: impl Into<String>, suffix_length: usize) -> Self {
        Self::with_rng(prefix.into(), suffix_length, StdRng::from_entropy())
    }

    /// 固定種子，測試用
    pub fn with_seed(prefix: impl Into<String>, suffix_length: usize, seed: u64) -> Self {
        Self::with_rng(prefix.into(), suffix_length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(prefix: String, suffix_length: usize, rng: StdRng) -> Self {
        Self {
            prefix,
            // 長度 0 只能產生一個序號
            suffix_length: suffix_length.max(1),
            rng,
            issued: HashSet::new(),
            issued_per_length: HashMap::new(),
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    pub fn suffix_length(&self) -> usize {
        self.suffix_length
    }

    fn grow_if_exhausted(&mut self, kind: ContainerKind) {
        while self
            .issued_per_length
            .get(&(kind, self.suffix_length))
            .copied()
            .unwrap_or(0)
            >= suffix_space(self.suffix_length)
        {
            self.suffix_length += 1;
            tracing::debug!(
                "All {} serials of the current length issued, suffix grows to {}",
                kind,
                self.suffix_length
            );
        }
    }
}

impl Default for RandomSerialGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SUFFIX_LENGTH)
    }
}

impl SerialNumberSource for RandomSerialGenerator {
    fn next_serial(&mut self, kind: ContainerKind) -> SerialNumber {
        self.grow_if_exhausted(kind);
        loop {
            let suffix: String = (&mut self.rng)
                .sample_iter(&Alphanumeric)
                .take(self.suffix_length)
                .map(char::from)
                .collect();
            let serial = format_serial(&self.prefix, kind, &suffix);
            if self.issued.insert(serial.clone()) {
                *self
                    .issued_per_length
                    .entry((kind, self.suffix_length))
                    .or_insert(0) += 1;
                return serial;
            }
            tracing::debug!("Serial {} already issued, drawing again", serial);
        }
    }
}

/// Deterministic `KON-G-0001`, `KON-R-0002`, ... serials from one shared counter.
#[derive(Debug, Clone)]
pub struct SequentialSerialGenerator {
    prefix: String,
    width: usize,
    next: u64,
}

impl SequentialSerialGenerator {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            next: 1,
        }
    }
}

impl Default for SequentialSerialGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_SUFFIX_LENGTH)
    }
}

impl SerialNumberSource for SequentialSerialGenerator {
    fn next_serial(&mut self, kind: ContainerKind) -> SerialNumber {
        let suffix = format!("{:0width$}", self.next, width = self.width);
        self.next += 1;
        format_serial(&self.prefix, kind, &suffix)
    }
}
