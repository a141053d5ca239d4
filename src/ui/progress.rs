//! Terminal progress for the patch workflow.
//!
//! With animation a spinner for the running step is redrawn in place on
//! stderr by a ticker thread; without it every step start and finish is
//! printed as its own line. The summary goes to stdout.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use airlift::domain::ports::{PatchEvent, PatchEventSink, PatchStep};

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::patch::render_patch_summary;
use crate::ui::widgets::spinner::Spinner;

const TICK: Duration = Duration::from_millis(80);

#[derive(Default)]
struct LiveState {
    region: LiveRegion,
    spinner: Option<Spinner>,
}

struct Ticker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

pub struct TerminalEventSink {
    ui: UiContext,
    state: Arc<Mutex<LiveState>>,
    ticker: Mutex<Option<Ticker>>,
}

impl TerminalEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            state: Arc::new(Mutex::new(LiveState::default())),
            ticker: Mutex::new(None),
        }
    }

    fn start_step(&self, step: PatchStep) {
        let spinner = Spinner::new(step.label());
        if let Ok(mut live) = self.state.lock() {
            let LiveState { region, spinner: slot } = &mut *live;
            let _ = region.update(&mut io::stderr(), &spinner.render(self.ui.unicode));
            *slot = Some(spinner);
        }
        self.start_ticker();
    }

    fn finish_step(&self, success: bool) {
        self.stop_ticker();
        if let Ok(mut live) = self.state.lock() {
            let LiveState { region, spinner } = &mut *live;
            if let Some(spinner) = spinner.take() {
                let line = if success {
                    spinner.succeed(self.ui.color, self.ui.unicode)
                } else {
                    spinner.fail(self.ui.color, self.ui.unicode)
                };
                let _ = region.update(&mut io::stderr(), &line);
                region.commit();
            }
        }
    }

    fn start_ticker(&self) {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let state = Arc::clone(&self.state);
        let unicode = self.ui.unicode;

        let handle = thread::spawn(move || loop {
            thread::sleep(TICK);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            let Ok(mut live) = state.lock() else { break };
            let LiveState { region, spinner } = &mut *live;
            if let Some(spinner) = spinner.as_mut() {
                spinner.tick();
                let _ = region.update(&mut io::stderr(), &spinner.render(unicode));
            }
        });

        if let Ok(mut ticker) = self.ticker.lock() {
            *ticker = Some(Ticker { stop, handle });
        }
    }

    fn stop_ticker(&self) {
        let ticker = self.ticker.lock().ok().and_then(|mut t| t.take());
        if let Some(ticker) = ticker {
            ticker.stop.store(true, Ordering::Relaxed);
            let _ = ticker.handle.join();
        }
    }
}

impl Drop for TerminalEventSink {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

/// Line printed for `event` when animation is off.
fn plain_line(event: &PatchEvent, color: bool, unicode: bool) -> Option<String> {
    let (icon, step) = match event {
        PatchEvent::StepStarted { step } => (Icon::Progress, step),
        PatchEvent::StepCompleted { step } => (Icon::Success, step),
        PatchEvent::StepFailed { step, .. } => (Icon::Error, step),
        _ => return None,
    };
    Some(format!("{} {}", icon.colored(color, unicode), step.label()))
}

impl PatchEventSink for TerminalEventSink {
    fn on_event(&self, event: PatchEvent) {
        if let PatchEvent::Summary(summary) = &event {
            println!();
            print!(
                "{}",
                render_patch_summary(summary, self.ui.color, self.ui.unicode)
            );
            println!();
            return;
        }

        if !self.ui.animation {
            if let Some(line) = plain_line(&event, self.ui.color, self.ui.unicode) {
                eprintln!("{line}");
            }
            return;
        }

        match event {
            PatchEvent::StepStarted { step } => self.start_step(step),
            PatchEvent::StepCompleted { .. } => self.finish_step(true),
            PatchEvent::StepFailed { .. } => self.finish_step(false),
            _ => {}
        }
    }
}
