//! # Renderer 模块
//!
//! 基于 wgpu 的清屏渲染器：每帧用一个颜色清空窗口表面并呈现。

use color_lerp::Color;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use winit::window::Window;

/// 渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("创建渲染表面失败: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("找不到可用的图形适配器")]
    NoAdapter,

    #[error("请求图形设备失败: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("渲染表面不支持任何纹理格式")]
    UnsupportedSurface,

    #[error("获取表面纹理失败: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

/// 渲染器
///
/// 持有窗口表面与 GPU 设备。窗口通过 `Arc` 共享，保证表面生命周期不超过窗口。
pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

impl Renderer {
    /// 为窗口创建渲染器（阻塞等待适配器与设备）
    pub fn new(window: Arc<Window>) -> Result<Self, RenderError> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(RenderError::NoAdapter)?;
        info!(adapter = ?adapter.get_info().name, "图形适配器就绪");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("color-lerp device"),
                ..Default::default()
            },
            None,
        ))?;

        let caps = surface.get_capabilities(&adapter);
        // 优先使用非 sRGB 格式，颜色字节可以原样写入
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        debug!(?format, width = config.width, height = config.height, "渲染表面已配置");

        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// 窗口尺寸变化时重新配置表面
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            // 最小化
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// 用指定颜色清屏并呈现
    ///
    /// 表面丢失或过期时重新配置并跳过本帧。
    pub fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("渲染表面失效，重新配置");
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("获取表面纹理超时，跳过本帧");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("clear encoder"),
            });

        let clear = clear_color(color, self.config.format.is_srgb());
        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// 把 8 位颜色转换为 wgpu 清屏颜色
///
/// sRGB 表面会在写入时做线性 → sRGB 编码，所以 RGB 通道需要先解码为线性值。
/// 透明度始终是线性的。
pub fn clear_color(color: Color, srgb_surface: bool) -> wgpu::Color {
    let channel = |value: u8| {
        let c = f64::from(value) / 255.0;
        if srgb_surface { srgb_to_linear(c) } else { c }
    };

    wgpu::Color {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
        a: f64::from(color.a) / 255.0,
    }
}

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
