//! 定时器封装模块
//!
//! 使用 `gloo-timers` 的 Future 接口实现请求超时。

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use postcard_admin::Timer;
use std::time::Duration;

pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}
