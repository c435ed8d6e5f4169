use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::state::chart_data::{ring_segment_points, slice_fractions};
use crate::state::color_source::hex_to_rgb;
use crate::state::ChartData;

const CANVAS_SIZE: u32 = 320;
const OUTER_RADIUS: f64 = 150.0;
const INNER_RADIUS: f64 = 75.0;

#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    pub data: ChartData,
}

pub struct DonutChart {
    canvas_ref: NodeRef,
}

impl Component for DonutChart {
    type Message = ();
    type Properties = DonutChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        ctx.props().data != old_props.data
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(&ctx.props().data);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let data = &ctx.props().data;

        html! {
            <div class="donut-chart-body">
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="donut-chart-canvas"
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                ></canvas>
                <ul class="donut-chart-legend">
                    {for data.slices().map(|slice| html! {
                        <li class="legend-item">
                            <span
                                class="legend-swatch"
                                style={format!("background-color: {};", slice.color)}
                            ></span>
                            <span class="legend-label">{slice.label}</span>
                        </li>
                    })}
                </ul>
            </div>
        }
    }
}

impl DonutChart {
    fn draw_chart(&self, data: &ChartData) {
        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }
        if data.is_empty() {
            let _ = root.present();
            return;
        }

        let center = ((CANVAS_SIZE / 2) as i32, (CANVAS_SIZE / 2) as i32);
        for ((start, end), color) in slice_fractions(data.values()).into_iter().zip(data.colors()) {
            if end <= start {
                continue;
            }
            let (r, g, b) = hex_to_rgb(color).unwrap_or((0, 0, 0));
            let points = ring_segment_points(center, OUTER_RADIUS, INNER_RADIUS, start, end);
            if root.draw(&Polygon::new(points, RGBColor(r, g, b).filled())).is_err() {
                return;
            }
        }

        let _ = root.present();
    }
}
