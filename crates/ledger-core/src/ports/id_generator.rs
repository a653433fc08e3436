//! IdGenerator port - ID 生成の抽象化
//!
//! テスト容易性のために、trait として抽象化しています。
//! 衝突した場合の再生成は registry 側の責務です（generator は一意性を保証しない）。
//!
//! # 実装
//! - **RandomIdGenerator**: 128-bit すべてランダム（デフォルト）
//! - **UlidGenerator**: Clock 由来の timestamp + ランダム部分

use crate::domain::ActionId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は action id を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（registry を複数スレッドから共有できるように）
pub trait IdGenerator: Send + Sync {
    fn generate_action_id(&self) -> ActionId;
}

/// 128 random bits per id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate_action_id(&self) -> ActionId {
        ActionId::from_ulid(Ulid::from(rand::random::<u128>()))
    }
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// 生成順でソート可能な id が欲しい場合に使います。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    // ULID timestamps are unsigned; instants before the epoch clamp to 0.
    fn generate_action_id(&self) -> ActionId {
        let timestamp_ms = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        ActionId::from_ulid(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

/// Hands out a fixed sequence of ids, then fresh random ones.
#[cfg(test)]
pub(crate) struct ScriptedIdGenerator {
    script: std::sync::Mutex<std::collections::VecDeque<ActionId>>,
}

#[cfg(test)]
impl ScriptedIdGenerator {
    pub(crate) fn new(ids: impl IntoIterator<Item = ActionId>) -> Self {
        Self {
            script: std::sync::Mutex::new(ids.into_iter().collect()),
        }
    }

    /// Always returns `id`.
    pub(crate) fn stuck_on(id: ActionId) -> Self {
        Self::new(std::iter::repeat_n(id, 1024))
    }
}

#[cfg(test)]
impl IdGenerator for ScriptedIdGenerator {
    fn generate_action_id(&self) -> ActionId {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RandomIdGenerator.generate_action_id())
    }
}
