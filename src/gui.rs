use capacitor_canvas::{Shape, TrajectoryCanvas, TrajectoryView, BACKGROUND_COLOR};
use egui::{Color32, Context, Pos2};
use egui_wgpu::{Renderer, RendererOptions};
use egui_winit::State;
use wgpu::{Device, TextureFormat};
use winit::{event::WindowEvent, window::Window};

use crate::form::{FormState, QuantityInput, EXPONENT_MAX, EXPONENT_MIN, MAXIMUM_INPUT_SIZE};

/// Share of the window width taken by the right-hand menu.
const MENU_FRACTION: f32 = 0.25;

/// Width of the right-hand menu in a window `total` points wide; the canvas
/// gets the remaining three quarters.
fn menu_width(total: f32) -> f32 {
    total * MENU_FRACTION
}

/// Text of the blocking notification shown for unusable input.
pub const NOTICE_TITLE: &str = "Enter the data";

/// Everything the shell keeps between frames.
pub struct AppState {
    pub form: FormState,
    pub canvas: TrajectoryCanvas,
    /// Detail of a pending notification; `Some` keeps the modal open.
    pub notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            canvas: TrajectoryCanvas::new(0.0, 0.0),
            notice: None,
        }
    }
}

impl AppState {
    /// Read the form and draw the resulting path. Bad input or an undefined
    /// trajectory raises the notification and leaves results and canvas as
    /// they were.
    pub fn run(&mut self) {
        let (params, scale) = match self.form.read() {
            Ok(read) => read,
            Err(err) => {
                log::warn!("Rejected input: {}", err);
                self.notice = Some(err.to_string());
                return;
            }
        };

        match self.canvas.trajectory_requested(&params, scale) {
            Ok(outcome) => {
                log::info!(
                    "Δx = {} m, Δt = {} s",
                    outcome.final_x,
                    outcome.elapsed_time
                );
                self.form.set_results(outcome.final_x, outcome.elapsed_time);
            }
            Err(err) => {
                log::warn!("Trajectory undefined: {}", err);
                self.notice = Some(err.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        self.form.reset();
        self.canvas.reset();
    }
}

pub struct Gui {
    context: Context,
    state: State,
    renderer: Renderer,
}

impl Gui {
    pub fn new(device: &Device, output_color_format: TextureFormat, window: &Window) -> Self {
        let context = Context::default();
        context.set_visuals(egui::Visuals::light());
        let id = context.viewport_id();

        let state = State::new(
            context.clone(),
            id,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(device.limits().max_texture_dimension_2d as usize),
        );

        let renderer = Renderer::new(
            device,
            output_color_format,
            RendererOptions {
                msaa_samples: 1,
                depth_stencil_format: None,
                dithering: false,
                ..Default::default()
            },
        );

        Self {
            context,
            state,
            renderer,
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.state.on_window_event(window, event);
        response.consumed
    }

    /// Run one egui frame and record its draw commands. Returns whether egui
    /// asked for another frame right away.
    pub fn render(
        &mut self,
        device: &Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        app_state: &mut AppState,
    ) -> bool {
        let raw_input = self.state.take_egui_input(window);

        let full_output = self.context.run(raw_input, |ctx| {
            ui(ctx, app_state);
        });

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let repaint_now = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());

        let clipped_primitives = self
            .context
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = window.inner_size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &clipped_primitives,
            &screen_descriptor,
        );

        let mut render_pass = encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            })
            .forget_lifetime();

        self.renderer
            .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
        drop(render_pass);

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        repaint_now
    }
}

fn ui(ctx: &Context, state: &mut AppState) {
    let mut run = false;
    let mut reset = false;

    // Parameters and results (right)
    let width = menu_width(ctx.available_rect().width());
    egui::SidePanel::right("parameters")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            ui.group(|ui| {
                let [mass, charge, voltage, distance, velocity, scale] = state.form.rows_mut();
                for input in [mass, charge, voltage, distance, velocity] {
                    quantity_row(ui, input);
                }
                // Editing the scale redraws straight away.
                if quantity_row(ui, scale) {
                    run = true;
                }
            });

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    run |= ui.button("▶").on_hover_text("Run").clicked();
                    reset |= ui.button("↺").on_hover_text("Reset").clicked();
                });
            });

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Δx: ");
                    ui.monospace(&state.form.distance_result);
                });
                ui.horizontal(|ui| {
                    ui.label("Δt: ");
                    ui.monospace(&state.form.time_result);
                });
            });
        });

    // Capacitor canvas (left)
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(rgb(BACKGROUND_COLOR)))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            state.canvas.resize(rect.width(), rect.height());

            if reset {
                state.reset();
            } else if run {
                state.run();
            }

            let painter = ui.painter_at(rect);
            for shape in state.canvas.shapes() {
                painter.add(to_egui_shape(shape, rect.min));
            }
        });

    if let Some(detail) = state.notice.clone() {
        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
            ui.heading(NOTICE_TITLE);
            ui.label(detail);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed || modal.should_close() {
            state.notice = None;
        }
    }
}

/// One `label: [mantissa] [exponent]` row. Returns whether the mantissa was
/// edited this frame.
fn quantity_row(ui: &mut egui::Ui, input: &mut QuantityInput) -> bool {
    ui.horizontal(|ui| {
        ui.add_sized([44.0, 20.0], egui::Label::new(format!("{}:", input.label)));

        let response = ui.add(
            egui::TextEdit::singleline(&mut input.mantissa)
                .char_limit(MAXIMUM_INPUT_SIZE)
                .desired_width(120.0),
        );
        if response.changed() {
            input
                .mantissa
                .retain(|c| c.is_ascii_digit() || "+-.,eE".contains(c));
        }

        ui.add(
            egui::DragValue::new(&mut input.exponent)
                .range(EXPONENT_MIN..=EXPONENT_MAX)
                .speed(0.1)
                .prefix("10^"),
        );

        response.changed()
    })
    .inner
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn to_egui_shape(shape: &Shape, origin: Pos2) -> egui::Shape {
    let at = |p: glam::Vec2| egui::pos2(origin.x + p.x, origin.y + p.y);

    match shape {
        Shape::Line { from, to, stroke } => egui::Shape::line_segment(
            [at(*from), at(*to)],
            egui::Stroke::new(stroke.width, rgb(stroke.color)),
        ),
        Shape::Polyline { points, stroke } => egui::Shape::line(
            points.iter().map(|&p| at(p)).collect(),
            egui::Stroke::new(stroke.width, rgb(stroke.color)),
        ),
    }
}
