//! Replay pointer events through a card.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{bail, Context as _, Result};
use card_core::config::LoggingConfig;
use card_core::controller::CardController;
use card_core::notify::{Notice, Notifier};
use card_core::state::CardState;
use card_core::toast::ToastQueue;
use card_observability::{CardId, LogSink, StructuredLogger};
use chrono::Utc;
use serde::Serialize;

use super::SimulateArgs;
use crate::context::Context;

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Enter,
    Leave,
    Click,
    Wait(Duration),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Enter => write!(f, "enter"),
            Event::Leave => write!(f, "leave"),
            Event::Click => write!(f, "click"),
            Event::Wait(d) => write!(f, "wait:{}", d.as_millis()),
        }
    }
}

/// Parse `enter`, `leave`, `click` or `wait:<ms>`.
pub fn parse_event(s: &str) -> Result<Event> {
    match s.trim().to_ascii_lowercase().as_str() {
        "enter" | "hover" => Ok(Event::Enter),
        "leave" | "unhover" => Ok(Event::Leave),
        "click" | "activate" => Ok(Event::Click),
        other => match other.strip_prefix("wait:") {
            Some(ms) => {
                let ms: u64 = ms
                    .parse()
                    .with_context(|| format!("Invalid wait duration: {}", s))?;
                Ok(Event::Wait(Duration::from_millis(ms)))
            }
            None => bail!("Unknown event '{}': expected enter, leave, click or wait:<ms>", s),
        },
    }
}

/// Notifier that stacks notices in a queue timed from `start`.
pub struct QueueNotifier {
    start: Instant,
    queue: Mutex<ToastQueue>,
}

impl QueueNotifier {
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            queue: Mutex::new(ToastQueue::new()),
        }
    }

    /// Drop expired toasts and return how many went.
    pub fn expire(&self) -> usize {
        let now = self.start.elapsed();
        self.queue.lock().map(|mut q| q.expire(now).len()).unwrap_or(0)
    }

    pub fn live(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }
}

impl Notifier for QueueNotifier {
    fn notify(&self, notice: Notice) {
        let now = self.start.elapsed();
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(notice, now);
        }
    }
}

/// What the card looked like after one event.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub event: String,
    pub state: CardState,
    pub button_visible: bool,
    pub label: &'static str,
    pub glyph: &'static str,
    pub notices_sent: u32,
    pub toasts_live: usize,
    pub toasts_expired: usize,
}

/// Apply a pointer event. Waits are the caller's business.
pub fn apply(card: &mut CardController, event: Event) {
    match event {
        Event::Enter => card.pointer_enter(),
        Event::Leave => card.pointer_leave(),
        Event::Click => {
            card.activate();
        }
        Event::Wait(_) => {}
    }
}

fn snapshot(card: &CardController, event: Event, notices_sent: u32, toasts: &QueueNotifier) -> Step {
    let look = card.appearance();
    Step {
        event: event.to_string(),
        state: card.state(),
        button_visible: look.visible,
        label: look.label,
        glyph: look.glyph.as_str(),
        notices_sent,
        toasts_expired: toasts.expire(),
        toasts_live: toasts.live(),
    }
}

/// `--logs` forces stderr output; otherwise `logging.stderr` decides.
fn log_sink(force: bool, logging: &LoggingConfig) -> LogSink {
    if force || logging.stderr {
        LogSink::Stderr
    } else {
        LogSink::Discard
    }
}

/// Run the simulate command.
pub async fn run(args: SimulateArgs, ctx: &Context) -> Result<()> {
    let product = ctx.load_product(&args.product)?;
    let events = args
        .events
        .iter()
        .map(|e| parse_event(e))
        .collect::<Result<Vec<_>>>()?;

    let start = Instant::now();
    let toasts = Arc::new(QueueNotifier::new(start));
    let logging = &ctx.config.logging;
    let logger = StructuredLogger::new(CardId::generate())
        .with_component("product-card")
        .with_product(&product.id)
        .with_min_level(args.log_level.unwrap_or(logging.level))
        .with_format(logging.format)
        .with_sink(log_sink(args.logs, logging));
    let mut card = CardController::with_logger(&ctx.config, toasts.clone(), logger);

    ctx.output
        .header(&format!("Simulating {} ({})", product.title, product.id));

    let mut steps = Vec::with_capacity(events.len());
    for (i, event) in events.iter().copied().enumerate() {
        let sent_before = card.metrics().notices_sent;
        if let Event::Wait(d) = event {
            tokio::time::sleep(d).await;
        }
        apply(&mut card, event);

        let step = snapshot(&card, event, card.metrics().notices_sent - sent_before, &toasts);
        let mut line = format!(
            "{:<10} {:<9} visible={:<5} \"{}\"",
            step.event,
            step.state.as_str(),
            step.button_visible,
            step.label
        );
        if step.notices_sent > 0 {
            line.push_str(&format!(" +{} toast", step.notices_sent));
        }
        if step.toasts_expired > 0 {
            line.push_str(&format!(" -{} expired", step.toasts_expired));
        }
        ctx.output.step(i + 1, events.len(), &line);
        steps.push(step);
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "product": product.id,
            "card": card.card_id().to_string(),
            "steps": steps,
            "metrics": card.metrics(),
        }));
    } else {
        ctx.output.info("");
        ctx.output.kv("Final state", card.state().as_str());
        ctx.output.kv("Toasts live", &toasts.live().to_string());
        if ctx.output.is_verbose() {
            ctx.output.kv("Metrics", &card.metrics().to_summary());
        }
    }

    Ok(())
}
