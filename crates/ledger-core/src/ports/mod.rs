//! Ports - 抽象化レイヤー
//!
//! registry が外部から受け取る能力を trait として定義します。
//! - **IdGenerator**: action id の生成
//! - **Clock**: 現在時刻（UlidGenerator の timestamp 部分と、呼び出し側の `performed_at` 用）
//!
//! registry 自身は `performed_at` のために時計を読みません。時刻は常に呼び出し側が渡します。

pub mod clock;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, RandomIdGenerator, UlidGenerator};
