//! タイムライン再生（CLI版）
//!
//! 絞り込み後の平坦列をタイムラインステッパで2秒間隔に再生する。
//! tokioのintervalがタイマー本体で、Finishedでループを抜けると
//! intervalはdropされる（張りっぱなしにしない）。

use capascope_common::{FlatEvent, Tick, TimelineStepper, STEP_INTERVAL_MS};
use std::time::Duration;

/// 平坦列を1件ずつ時系列風に出力
pub async fn run_replay(events: &[FlatEvent]) {
    let mut stepper = TimelineStepper::new();
    stepper.reset(events.len());

    if !stepper.start() {
        println!("再生する手法がありません");
        return;
    }

    let mut ticker = tokio::time::interval(Duration::from_millis(u64::from(STEP_INTERVAL_MS)));
    ticker.tick().await; // 初回は即時発火なので読み捨てる

    print_step(events, 0);
    loop {
        ticker.tick().await;
        match stepper.tick() {
            Tick::Advanced(step) => print_step(events, step),
            Tick::Finished => break,
            Tick::Ignored => break,
        }
    }
    println!("\n✅ 再生完了（{}件）", events.len());
}

fn print_step(events: &[FlatEvent], step: usize) {
    let event = &events[step];
    let name = event.technique_name();
    let name = if name.is_empty() { "(名称なし)".to_string() } else { name };
    let description = event.description();

    print!("[{}/{}] {} - {}", step + 1, events.len(), event.category, name);
    if !description.is_empty() {
        print!(": {}", description);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replay_empty_returns_immediately() {
        // 空列はタイマーを張らずに終了する
        run_replay(&[]).await;
    }
}
