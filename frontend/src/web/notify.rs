//! 消息提示（Toast）

use leptos::prelude::*;
use postcard_admin::{MessageKind, Notifier};
use std::time::Duration;

/// 消息显示时长
const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for Toasts {
    /// 相同的消息正在显示时不会重复弹出
    fn show_message(&self, kind: MessageKind, text: &str) {
        let duplicate = self
            .items
            .with_untracked(|list| list.iter().any(|t| t.kind == kind && t.text == text));
        if duplicate {
            return;
        }

        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|list| {
            list.push(Toast {
                id,
                kind,
                text: text.to_string(),
            })
        });

        let this = *self;
        set_timeout(move || this.dismiss(id), TOAST_DURATION);
    }
}
