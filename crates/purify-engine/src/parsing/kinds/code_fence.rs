/// Signature of a fence delimiter line: the length of its leading backtick run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub len: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const TICK: char = '`';
    /// Shortest backtick run that counts as a fence.
    pub const MIN_LEN: usize = 3;

    /// Detects a fence delimiter. The info string after the run is ignored.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let len = line.chars().take_while(|&c| c == Self::TICK).count();
        (len >= Self::MIN_LEN).then_some(FenceSig { len })
    }

    /// A fence closes only on a line that is exactly the opening run.
    pub fn closes(open: FenceSig, line: &str) -> bool {
        line.len() == open.len && line.chars().all(|c| c == Self::TICK)
    }
}
