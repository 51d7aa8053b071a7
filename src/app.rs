use leptos::*;

use crate::{
    application::coordinator::{self, RunPhase},
    domain::{
        chart::{HrPoint, services::ChartGeometryService},
        classification::bands::{CLASS_TABLE_ROWS, TEMPERATURE_CLASS_BANDS},
        logging::{LogComponent, LogEntry, Logger, format_clock, get_logger},
        star::{Kelvin, SolarLuminosity, SolarMass, SolarRadius, StarParameters},
    },
    global_state::{
        classification_signal, evolutionary_state_signal, hr_points_signal, light_curve_signal,
        luminosity_input_signal, mass_input_signal, radius_input_signal, run_count_signal,
        run_phase_signal, star_visual_signal, temperature_input_signal,
    },
    infrastructure::services::ConsoleLogger,
};

// 🔗 Global signals for log lines (bridge to domain::logging)
thread_local! {
    static GLOBAL_LOGS: RwSignal<Vec<String>> = create_rw_signal(Vec::new());
    static IS_LOG_PAUSED: RwSignal<bool> = create_rw_signal(false);
}

/// 🌉 Bridge logger connecting domain::logging to Leptos signals
///
/// Entries go to the browser console and to the on-page debug console,
/// which keeps only the most recent 100 lines.
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new() -> Self {
        let console = if cfg!(debug_assertions) {
            ConsoleLogger::new_development()
        } else {
            ConsoleLogger::new_production()
        };
        Self { console }
    }
}

impl Default for LeptosLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        let formatted = format!(
            "[{}] {} {}: {}",
            format_clock(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );

        GLOBAL_LOGS.with(|logs| {
            IS_LOG_PAUSED.with(|paused| {
                if !paused.get() {
                    logs.update(|lines| {
                        lines.push(formatted);
                        // Keep the on-page console bounded
                        while lines.len() > 100 {
                            lines.remove(0);
                        }
                    });
                }
            });
        });

        self.console.log(entry);
    }
}

/// 🦀 Root component of the stellar simulation UI
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .star-sim-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: linear-gradient(135deg, #0b0d2a 0%, #1e3c72 100%);
                min-height: 100vh;
                padding: 20px;
                color: white;
            }

            .header {
                text-align: center;
                margin-bottom: 20px;
                background: rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(10px);
                padding: 20px;
                border-radius: 15px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .run-info {
                display: flex;
                justify-content: center;
                gap: 40px;
                margin-top: 15px;
            }

            .info-item {
                text-align: center;
            }

            .info-value {
                font-size: 24px;
                font-weight: 700;
                color: #f5d76e;
                text-shadow: 0 0 10px rgba(245, 215, 110, 0.3);
            }

            .info-label {
                font-size: 12px;
                color: #a0a0a0;
                margin-top: 5px;
            }

            .control-row {
                display: flex;
                justify-content: center;
                align-items: stretch;
                gap: 20px;
                flex-wrap: wrap;
            }

            .panel {
                background: rgba(255, 255, 255, 0.08);
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 15px;
                padding: 20px;
                margin-bottom: 20px;
            }

            .panel h2 {
                margin-top: 0;
                font-size: 18px;
            }

            .parameter-panel {
                min-width: 340px;
            }

            .field-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 12px;
                margin: 8px 0;
            }

            .field-row label {
                font-size: 14px;
                color: #e0e0e0;
            }

            .field-row input {
                width: 140px;
                padding: 6px 8px;
                border: 1px solid #4a5d73;
                border-radius: 6px;
                background: #16243d;
                color: white;
                font-family: 'Courier New', monospace;
            }

            .run-btn {
                margin-top: 12px;
                width: 100%;
                padding: 10px;
                border: none;
                border-radius: 8px;
                background: #f39c12;
                color: white;
                font-size: 15px;
                font-weight: bold;
                cursor: pointer;
            }

            .run-btn:hover {
                background: #e67e22;
            }

            .run-btn:disabled {
                background: #4a5d73;
                cursor: not-allowed;
            }

            .star-visual {
                min-width: 260px;
                text-align: center;
            }

            .visual-caption {
                margin-top: 10px;
                font-size: 14px;
                color: #a0a0a0;
            }

            .classification-results p {
                margin: 4px 0;
                font-size: 14px;
            }

            .hint {
                color: #a0a0a0;
                font-style: italic;
                font-size: 14px;
            }

            .class-table {
                width: 100%;
                border-collapse: collapse;
                font-size: 13px;
            }

            .class-table th,
            .class-table td {
                border: 1px solid #4a5d73;
                padding: 6px 8px;
                text-align: center;
            }

            .class-table thead th {
                background: rgba(255, 255, 255, 0.12);
            }

            .class-table tr.highlighted {
                background: rgba(255, 215, 0, 0.35);
            }

            .chart-panel {
                text-align: center;
            }

            .chart-svg {
                background: #101a30;
                border: 2px solid #4a5d73;
                border-radius: 10px;
            }

            .plot-area {
                fill: #16243d;
                stroke: #4a5d73;
            }

            .axis-label {
                fill: #a0a0a0;
                font-size: 13px;
            }

            .tick-label {
                fill: #a0a0a0;
                font-size: 11px;
                font-family: 'Courier New', monospace;
            }

            .band-label {
                fill: #e0e0e0;
                font-size: 11px;
            }

            .hr-marker {
                fill: #e74c3c;
                stroke: white;
                stroke-width: 1;
            }

            .clear-btn {
                margin-top: 10px;
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
            }

            .clear-btn:hover {
                background: #5a6d83;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.8);
                border-radius: 10px;
                padding: 15px;
                max-height: 300px;
                overflow-y: auto;
                border: 1px solid #4a5d73;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .debug-btn:hover {
                background: #5a6d83;
            }

            .debug-log {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                line-height: 1.3;
            }

            .log-line {
                color: #e0e0e0;
                margin: 2px 0;
                padding: 1px 5px;
                border-radius: 3px;
            }

            .log-line:hover {
                background: rgba(255, 255, 255, 0.1);
            }
            "#}
        </style>
        <div class="star-sim-app">
            <Header />
            <div class="control-row">
                <ParameterPanel />
                <StarVisualization />
            </div>
            <ClassificationPanel />
            <LightCurveChart />
            <HrDiagramChart />
            <DebugConsole />
        </div>
    }
}

/// 📊 Header with the run counters driven by the global signals
#[component]
fn Header() -> impl IntoView {
    let run_phase = run_phase_signal();
    let run_count = run_count_signal();
    let evolutionary_state = evolutionary_state_signal();

    view! {
        <div class="header">
            <h1>"🌌 Supernova Simulation"</h1>
            <p>"Stellar classification • Light curves • HR diagram"</p>

            <div class="run-info">
                <div class="info-item">
                    <div class="info-value">
                        {move || run_count.get().to_string()}
                    </div>
                    <div class="info-label">"Completed Runs"</div>
                </div>
                <div class="info-item">
                    <div class="info-value">
                        {move || run_phase.get().to_string()}
                    </div>
                    <div class="info-label">"Run Phase"</div>
                </div>
                <div class="info-item">
                    <div class="info-value">
                        {move || evolutionary_state.get().to_string()}
                    </div>
                    <div class="info-label">"Evolutionary State"</div>
                </div>
            </div>
        </div>
    }
}

/// 🎛️ Parameter form submitting runs to the application coordinator
#[component]
fn ParameterPanel() -> impl IntoView {
    let mass_input = mass_input_signal();
    let temperature_input = temperature_input_signal();
    let luminosity_input = luminosity_input_signal();
    let radius_input = radius_input_signal();
    let run_phase = run_phase_signal();

    let run_simulation = move |_| {
        let parameters = StarParameters::new(
            SolarMass::from(parse_parameter(&mass_input.get())),
            Kelvin::from(parse_parameter(&temperature_input.get())),
            SolarLuminosity::from(parse_parameter(&luminosity_input.get())),
            SolarRadius::from(parse_parameter(&radius_input.get())),
        );

        spawn_local(async move {
            let _ = coordinator::execute_run(parameters).await;
        });
    };

    view! {
        <div class="panel parameter-panel">
            <h2>"Star Parameters"</h2>
            <ParameterField label="Mass (Solar Masses):" value=mass_input />
            <ParameterField label="Temperature (Kelvin):" value=temperature_input />
            <ParameterField label="Luminosity (Solar Luminosities):" value=luminosity_input />
            <ParameterField label="Radius (Solar Radii):" value=radius_input />
            <button
                class="run-btn"
                prop:disabled=move || run_phase.get() == RunPhase::Running
                on:click=run_simulation
            >
                "Run Simulation"
            </button>
        </div>
    }
}

/// One labelled numeric input bound to a global input signal
#[component]
fn ParameterField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="field-row">
            <label>{label}</label>
            <input
                type="number"
                step="any"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// ⭐ Star sphere sized by mass and tinted by spectral class
#[component]
fn StarVisualization() -> impl IntoView {
    let star_visual = star_visual_signal();
    let evolutionary_state = evolutionary_state_signal();

    view! {
        <div class="panel star-visual">
            <h2>"Star Visualization"</h2>
            <svg width="220" height="220" viewBox="0 0 220 220">
                <circle
                    cx="110"
                    cy="110"
                    r=move || format!("{:.1}", 18.0 * star_visual.get().scale)
                    fill=move || star_visual.get().color
                ></circle>
            </svg>
            <div class="visual-caption">
                {move || format!("State: {}", evolutionary_state.get())}
            </div>
        </div>
    }
}

/// 🔭 Classification readout plus the reference table with the active
/// spectral class highlighted
#[component]
fn ClassificationPanel() -> impl IntoView {
    let classification = classification_signal();

    view! {
        <div class="panel classification-panel">
            <h2>"Star Classification Results"</h2>
            {move || match classification.get() {
                Some(result) => view! {
                    <div class="classification-results">
                        <p>"Lifecycle Stage: " {result.lifecycle_stage.to_string()}</p>
                        <p>"Luminosity Classification: " {result.luminosity_class.to_string()}</p>
                        <p>"Spectral Type: " {result.spectral_type.to_string()}</p>
                        <p>"Chromaticity: " {result.chromaticity.to_string()}</p>
                        <p>"Hydrogen Lines: " {result.hydrogen_lines.to_string()}</p>
                    </div>
                }
                .into_view(),
                None => view! {
                    <p class="hint">"Run a simulation to classify the star."</p>
                }
                .into_view(),
            }}

            <h3>"Star Classification Table"</h3>
            <ClassTable />
        </div>
    }
}

/// Reference table of the seven spectral classes
#[component]
fn ClassTable() -> impl IntoView {
    let classification = classification_signal();

    view! {
        <table class="class-table">
            <thead>
                <tr>
                    <th>"Class"</th>
                    <th>"Effective Temperature"</th>
                    <th>"Chromaticity"</th>
                    <th>"Main-Sequence Mass"</th>
                    <th>"Main-Sequence Radius"</th>
                    <th>"Main-Sequence Luminosity"</th>
                    <th>"Hydrogen Lines"</th>
                    <th>"Fraction of Stars"</th>
                </tr>
            </thead>
            <tbody>
                {CLASS_TABLE_ROWS
                    .iter()
                    .map(|row| {
                        let spectral_type = row.spectral_type;
                        view! {
                            <tr class:highlighted=move || {
                                classification
                                    .get()
                                    .is_some_and(|result| result.spectral_type == spectral_type)
                            }>
                                <td>{row.spectral_type.letter()}</td>
                                <td>{row.effective_temperature}</td>
                                <td>{row.chromaticity}</td>
                                <td>{row.mass_range}</td>
                                <td>{row.radius_range}</td>
                                <td>{row.luminosity_range}</td>
                                <td>{row.hydrogen_lines}</td>
                                <td>{row.fraction_of_stars}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// 📉 Light curve of the most recent run
#[component]
fn LightCurveChart() -> impl IntoView {
    let light_curve = light_curve_signal();
    let geometry = ChartGeometryService::new(560.0, 260.0);

    view! {
        <div class="panel chart-panel">
            <h2>"Light Curve"</h2>
            {move || {
                let series = light_curve.get();
                if series.is_empty() {
                    return view! {
                        <p class="hint">"No data available for the light curve."</p>
                    }
                    .into_view();
                }

                let points = geometry.light_curve_polyline(&series);
                let (stroke, stroke_width) = series
                    .datasets
                    .first()
                    .map(|dataset| (dataset.border_color, dataset.border_width))
                    .unwrap_or(("orange", 2));

                view! {
                    <svg width="660" height="330" viewBox="0 0 660 330" class="chart-svg">
                        <g transform="translate(60, 20)">
                            <rect width="560" height="260" class="plot-area"></rect>
                            <polyline
                                points=points
                                fill="none"
                                stroke=stroke
                                stroke-width=stroke_width
                            ></polyline>
                        </g>
                        <text x="340" y="318" text-anchor="middle" class="axis-label">
                            "Time (days)"
                        </text>
                        <text
                            x="18"
                            y="150"
                            text-anchor="middle"
                            transform="rotate(-90, 18, 150)"
                            class="axis-label"
                        >
                            "Apparent Magnitude"
                        </text>
                    </svg>
                }
                .into_view()
            }}
        </div>
    }
}

/// ✨ Hertzsprung-Russell diagram accumulating one marker per run
#[component]
fn HrDiagramChart() -> impl IntoView {
    let hr_points = hr_points_signal();
    let geometry = ChartGeometryService::new(560.0, 340.0);

    view! {
        <div class="panel chart-panel">
            <h2>"Hertzsprung-Russell Diagram"</h2>
            <svg width="660" height="420" viewBox="0 0 660 420" class="chart-svg">
                <g transform="translate(70, 20)">
                    <rect width="560" height="340" class="plot-area"></rect>
                    {TEMPERATURE_CLASS_BANDS
                        .iter()
                        .map(|band| {
                            let (left, width) = geometry.hr_band_rect(band);
                            view! {
                                <rect
                                    x=format!("{left:.1}")
                                    y="0"
                                    width=format!("{width:.1}")
                                    height="340"
                                    fill=band.color
                                    fill-opacity="0.2"
                                ></rect>
                                <text
                                    x=format!("{:.1}", left + width / 2.0)
                                    y="16"
                                    text-anchor="middle"
                                    class="band-label"
                                >
                                    {band.label}
                                </text>
                            }
                        })
                        .collect_view()}
                    <For
                        each={move || hr_points.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, _)| *index
                        children=move |(_, point): (usize, HrPoint)| {
                            view! {
                                <circle
                                    cx=format!("{:.1}", geometry.hr_x(point.x))
                                    cy=format!("{:.1}", geometry.hr_y(point.y))
                                    r="6"
                                    class="hr-marker"
                                ></circle>
                            }
                        }
                    />
                </g>
                <text x="74" y="376" class="tick-label">"60,000"</text>
                <text x="626" y="376" text-anchor="end" class="tick-label">"0"</text>
                <text x="64" y="34" text-anchor="end" class="tick-label">"10⁵"</text>
                <text x="64" y="364" text-anchor="end" class="tick-label">"10⁻⁴"</text>
                <text x="350" y="404" text-anchor="middle" class="axis-label">
                    "Temperature (K)"
                </text>
                <text
                    x="18"
                    y="190"
                    text-anchor="middle"
                    transform="rotate(-90, 18, 190)"
                    class="axis-label"
                >
                    "Luminosity (Log L / L☉)"
                </text>
            </svg>
            <div>
                <button class="clear-btn" on:click=move |_| coordinator::clear_hr_history()>
                    "Clear History"
                </button>
            </div>
        </div>
    }
}

/// 🎯 Debug console bridged to domain::logging
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = GLOBAL_LOGS.with(|logs| *logs);
    let is_paused = IS_LOG_PAUSED.with(|paused| *paused);

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <button
                    on:click=move |_| {
                        is_paused.update(|p| *p = !*p);
                        if is_paused.get() {
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "🛑 Logging paused"
                            );
                        } else {
                            get_logger().info(
                                LogComponent::Presentation("DebugConsole"),
                                "▶️ Logging resumed"
                            );
                        }
                    }
                    class="debug-btn"
                >
                    {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                </button>
                <button
                    on:click=move |_| {
                        GLOBAL_LOGS.with(|logs| logs.set(Vec::new()));
                        get_logger().info(
                            LogComponent::Presentation("DebugConsole"),
                            "🗑️ Log history cleared"
                        );
                    }
                    class="debug-btn"
                >
                    "🗑️ Clear"
                </button>
            </div>
            <div class="debug-log">
                <For
                    each=move || logs.get()
                    key=|log| log.clone()
                    children=move |log| {
                        view! { <div class="log-line">{log}</div> }
                    }
                />
            </div>
        </div>
    }
}

/// Parse one form field. Non-numeric input becomes NaN and fails
/// parameter validation, which reports the offending field.
fn parse_parameter(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
