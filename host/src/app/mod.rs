//! # App 模块
//!
//! winit 应用与主循环：每帧读取 tick，计算颜色，清屏并呈现。

mod frame;
mod headless;

pub use frame::*;
pub use headless::*;

use crate::clock::{SystemClock, TickSource};
use crate::config::AppConfig;
use crate::error::{HostError, HostResult};
use crate::renderer::Renderer;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, trace};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// 打开窗口并运行主循环，直到收到退出信号
pub fn run(config: AppConfig) -> HostResult<()> {
    let colors = FrameColors::from_config(&config);
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, colors, SystemClock::new());

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// 应用状态
pub struct App<C: TickSource> {
    config: AppConfig,
    colors: FrameColors,
    clock: C,
    frame_delay: Duration,
    next_frame: Instant,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    /// 回调中发生的错误，退出循环后由 `run` 返回
    error: Option<HostError>,
}

impl<C: TickSource> App<C> {
    pub fn new(config: AppConfig, colors: FrameColors, clock: C) -> Self {
        Self {
            frame_delay: Duration::from_millis(config.frame_delay_ms),
            config,
            colors,
            clock,
            next_frame: Instant::now(),
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: HostError) {
        error!(error = %e, "主循环出错，退出");
        self.error = Some(e);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> HostResult<()> {
        let window_config = &self.config.window;
        let attributes = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(window_config.width, window_config.height));

        let window = Arc::new(event_loop.create_window(attributes)?);
        let renderer = Renderer::new(window.clone())?;
        info!(
            width = window_config.width,
            height = window_config.height,
            behavior = %self.config.animation.behavior,
            cycle_time_ms = self.config.animation.cycle_time_ms,
            "窗口已创建"
        );

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let tick = self.clock.ticks();
        let color = self.colors.update(tick);
        trace!(tick, %color, "帧颜色");

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        if let Err(e) = renderer.clear(color) {
            self.fail(event_loop, e.into());
        }
    }
}

impl<C: TickSource> ApplicationHandler for App<C> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                info!("收到退出请求");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame = now + self.frame_delay;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
