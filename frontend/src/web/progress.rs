//! 顶部进度条
//!
//! 多个请求并发时，全部结束后才完成进度条。

use leptos::prelude::*;
use postcard_admin::ProgressIndicator;
use std::time::Duration;

/// 起始进度
const START_FRACTION: f64 = 0.08;
/// 完成后保留满格的时间
const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Clone, Copy)]
pub struct TopProgress {
    value: RwSignal<Option<f64>>,
    active: RwSignal<u32>,
}

impl TopProgress {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(None),
            active: RwSignal::new(0),
        }
    }

    /// 当前进度；`None` 表示隐藏
    pub fn value(&self) -> Signal<Option<f64>> {
        self.value.into()
    }
}

impl ProgressIndicator for TopProgress {
    fn start(&self) {
        self.active.update(|n| *n += 1);
        self.value.update(|v| {
            let current = v.filter(|f| *f < 1.0).unwrap_or(0.0);
            *v = Some(current.max(START_FRACTION));
        });
    }

    fn done(&self) {
        self.active.update(|n| *n = n.saturating_sub(1));
        if self.active.get_untracked() > 0 {
            // 仍有请求进行中，只推进一点
            self.value
                .update(|v| *v = v.map(|f| (f + (1.0 - f) * 0.3).min(0.95)));
            return;
        }

        self.value.set(Some(1.0));
        let this = *self;
        set_timeout(
            move || {
                if this.active.get_untracked() == 0 {
                    this.value.set(None);
                }
            },
            FADE_OUT,
        );
    }

    fn set(&self, fraction: f64) {
        self.value.set(Some(fraction.clamp(0.0, 1.0)));
    }
}
