use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;

pub const INPUT_SUFFIX: &str = ".per.dat";
pub const OUTPUT_SUFFIX: &str = ".per";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicPair {
    pub master: u64,
    pub slave: u64,
}

/// 一行原始輸入，number 為 1-based 行號
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: u64,
    pub text: String,
}

/// 以兩個平行序列保存全部配對，插入順序即輸入行順序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairTable {
    masters: Vec<u64>,
    slaves: Vec<u64>,
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.masters.try_reserve_exact(additional)?;
        self.slaves.try_reserve_exact(additional)
    }

    pub fn push(&mut self, pair: PeriodicPair) {
        self.masters.push(pair.master);
        self.slaves.push(pair.slave);
    }

    pub fn len(&self) -> usize {
        self.masters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }

    pub fn masters(&self) -> &[u64] {
        &self.masters
    }

    pub fn slaves(&self) -> &[u64] {
        &self.slaves
    }

    pub fn iter(&self) -> impl Iterator<Item = PeriodicPair> + '_ {
        self.masters
            .iter()
            .zip(self.slaves.iter())
            .map(|(&master, &slave)| PeriodicPair { master, slave })
    }

    pub fn reserved_bytes(&self) -> usize {
        (self.masters.capacity() + self.slaves.capacity()) * std::mem::size_of::<u64>()
    }
}

#[derive(Debug, Clone)]
pub struct SwapResult {
    pub pairs: PairTable,
    pub per_output: String,
}
