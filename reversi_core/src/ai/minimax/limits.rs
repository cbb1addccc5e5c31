use super::SEARCH_DEPTH;

/// 探索ノードで展開する候補手の集合。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Candidates {
    /// 8近傍のいずれかに石がある空きマス（合法性は見ない近似）。
    #[default]
    Adjacent,
    /// 手番側の合法手のみ。
    Legal,
}

/// 探索の制限。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchLimits {
    /// 候補手の生成方法。
    candidates: Candidates,
    /// ルートの手を打った後の探索深さ（ply）。
    depth: u8,
}

impl SearchLimits {
    /// 候補手の生成方法を返す。
    #[inline]
    #[must_use]
    pub const fn candidates(self) -> Candidates {
        self.candidates
    }

    /// 探索深さ（ply）を返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// 探索制限を生成する。
    ///
    /// - `depth`: ルートの手を打った後に読む深さ（ply）
    /// - `candidates`: 各ノードで展開する候補手
    #[inline]
    #[must_use]
    pub const fn new(depth: u8, candidates: Candidates) -> Self {
        Self { candidates, depth }
    }
}

impl Default for SearchLimits {
    #[inline]
    fn default() -> Self {
        Self::new(SEARCH_DEPTH, Candidates::Adjacent)
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct SearchStats {
    /// 評価関数を呼んだ末端ノード数。
    leaves: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 末端ノード数を加算する。
    pub(super) const fn inc_leaves(&mut self) {
        self.leaves = self.leaves.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 末端ノード数を返す。
    pub(super) const fn leaves(self) -> u64 {
        self.leaves
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(self) -> u64 {
        self.nodes
    }
}
