//! タイムラインステッパ（Timeline Stepper）
//!
//! 絞り込み後の平坦列を一定間隔で1ステップずつ進める有限状態機械。
//! 状態遷移:
//!
//! ```text
//! Idle --(結果到着, reset)--> Ready --(start)--> Running --(tick)--> ... --> Finished
//!   ^                                                                          |
//!   +--------------------(新しい結果/クエリ変更, reset)------------------------+
//! ```
//!
//! 機械自身はタイマーを持たない純粋な状態機械で、呼び出し側
//! （WASMのInterval / CLIのtokio interval）がキャンセル可能な
//! タイマーハンドルを所有する。`Tick::Finished` を受けた時点と、
//! 列が変わってresetする時点で、呼び出し側はタイマーを必ず破棄すること。
//! 生きているタイマーは常にインスタンスあたり1本以下。

/// ステップ進行の間隔（ミリ秒）
pub const STEP_INTERVAL_MS: u32 = 2_000;

/// ステッパの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// 結果なし（エラーペイロード・空列もここに留まる）
    Idle,
    /// 結果あり・再生前（step = 0）
    Ready,
    /// 自動進行中
    Running,
    /// 最終ステップ到達。タイマーは破棄済みであること
    Finished,
}

/// tick() の結果。呼び出し側のタイマー制御に使う
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// 1ステップ進んだ（新しいcurrent_step）
    Advanced(usize),
    /// 最終ステップに到達した。タイマーを破棄すること
    Finished,
    /// Running以外でのtick。何もしない
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineStepper {
    phase: Phase,
    current_step: usize,
    len: usize,
}

impl Default for TimelineStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineStepper {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            current_step: 0,
            len: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 現在のステップ。常に [0, len-1] の範囲
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// 駆動する列が変わった（新しい結果・クエリ編集）ときの再初期化
    ///
    /// どの状態からでも step 0 のReadyに戻る。空列ならIdle。
    /// 呼び出し側は必ずこの前に既存タイマーを破棄しておくこと。
    pub fn reset(&mut self, len: usize) {
        *self = if len == 0 {
            Self::new()
        } else {
            Self {
                phase: Phase::Ready,
                current_step: 0,
                len,
            }
        };
    }

    /// 再生開始（解析完了後に呼ぶ）
    ///
    /// Ready -> Running のときだけtrue。trueが返ったら
    /// 呼び出し側がタイマーを1本だけ張る。
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
            true
        } else {
            false
        }
    }

    /// タイマー1周期ぶんの進行
    ///
    /// 最終インデックス未満なら1つ進め、最終インデックス上での
    /// tickはFinishedに遷移する（current_stepは動かない）。
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Ignored;
        }
        let last = self.len - 1;
        if self.current_step < last {
            self.current_step += 1;
            Tick::Advanced(self.current_step)
        } else {
            self.phase = Phase::Finished;
            Tick::Finished
        }
    }
}
