//! Action identifiers.
//!
//! # ULID ベースの ID
//! ActionId は 128-bit の ULID を包む newtype です。
//! - **UUID互換**: 128-bit で UUID と同じサイズ
//! - **衝突確率**: ランダム部分が十分に大きいので、衝突は実質的に起きない
//!   （それでも registry 側で再生成ループを持つ）
//!
//! Display には `action-` プレフィックスを付けますが、serde ではプレフィックスなしの
//! ULID 文字列として扱います。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of an Action, assigned by the registry at registration time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(Ulid);

impl ActionId {
    /// Display で使うプレフィックス
    pub const PREFIX: &'static str = "action-";

    /// ULID から ActionId を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// All-zero id. Never produced by the shipped generators, handy as a
    /// guaranteed-missing key.
    pub fn nil() -> Self {
        Self(Ulid::nil())
    }

    /// 内部の ULID を取得
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for ActionId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}
