// ============================================================================
// panelfetch-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: Banner rendering and styling
//
// The banner is rendered into plain lines first (render_banner) and printed
// afterwards, so the layout can be tested without a terminal. Colors are
// applied during rendering only when enabled; alignment is computed on the
// uncolored text with unicode-width.
//
// Layout:
//
//   ──────────────────────────────────────────
//    PANELFETCH  panel-node-01
//   ──────────────────────────────────────────
//    SYSTEM
//      OS:          Debian GNU/Linux 12
//      ...
//
// Usage bars are green below 70%, yellow below 90% and red above.

use console::Term;
use owo_colors::OwoColorize;
use panelfetch_core::metrics::UNKNOWN;
use panelfetch_core::{SystemReport, format_bytes, format_uptime, format_usage, usage_bar, usage_fraction};
use std::sync::atomic::{AtomicBool, Ordering};
use unicode_width::UnicodeWidthStr;

/// Styling constants for terminal output
pub mod styling {
    pub const TITLE: &str = "PANELFETCH";
    pub const RULE_CHAR: &str = "─";
    pub const STEP_SYMBOL: &str = "»";
    pub const SUCCESS_SYMBOL: &str = "✓";

    pub const SECTION_INDENT: &str = " ";
    pub const STATUS_INDENT: &str = "   ";

    /// Labels are padded to this display width.
    pub const LABEL_WIDTH: usize = 12;
    pub const BAR_WIDTH: usize = 20;

    pub const MIN_WIDTH: usize = 40;
    pub const MAX_WIDTH: usize = 64;

    pub const WARN_FRACTION: f64 = 0.7;
    pub const CRITICAL_FRACTION: f64 = 0.9;
}

// Global color setting
static USE_COLOR: AtomicBool = AtomicBool::new(true);

/// Set whether to use color in terminal output
pub fn set_color(enable: bool) {
    USE_COLOR.store(enable, Ordering::Relaxed);
}

/// Check if color should be used (flag, NO_COLOR and terminal support)
pub fn should_use_color() -> bool {
    USE_COLOR.load(Ordering::Relaxed)
        && std::env::var_os("NO_COLOR").is_none()
        && supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Banner width for the current stdout, clamped to a readable range.
pub fn banner_width() -> usize {
    let (_, cols) = Term::stdout().size();
    (cols as usize).clamp(styling::MIN_WIDTH, styling::MAX_WIDTH)
}

struct Painter {
    color: bool,
}

impl Painter {
    fn rule(&self, width: usize) -> String {
        let line = styling::RULE_CHAR.repeat(width);
        if self.color { line.bright_black().to_string() } else { line }
    }

    fn title(&self, text: &str) -> String {
        if self.color { text.cyan().bold().to_string() } else { text.to_string() }
    }

    fn section(&self, text: &str) -> String {
        if self.color { text.bold().to_string() } else { text.to_string() }
    }

    fn muted(&self, text: &str) -> String {
        if self.color { text.bright_black().to_string() } else { text.to_string() }
    }

    fn fallback_aware(&self, value: &str) -> String {
        if self.color && value == UNKNOWN {
            value.yellow().to_string()
        } else {
            value.to_string()
        }
    }

    fn bar(&self, fraction: f64) -> String {
        let bar = usage_bar(fraction, styling::BAR_WIDTH);
        if !self.color {
            return bar;
        }
        if fraction >= styling::CRITICAL_FRACTION {
            bar.red().to_string()
        } else if fraction >= styling::WARN_FRACTION {
            bar.yellow().to_string()
        } else {
            bar.green().to_string()
        }
    }

    /// `   Label:      value` with the label padded by display width.
    fn status(&self, label: &str, value: &str) -> String {
        let label = format!("{label}:");
        let padding = styling::LABEL_WIDTH.saturating_sub(label.width()).max(1);
        format!(
            "{}{}{}{}",
            styling::STATUS_INDENT,
            self.muted(&label),
            " ".repeat(padding),
            value
        )
    }
}

/// Renders the banner as lines, ready to print.
pub fn render_banner(report: &SystemReport, width: usize, color: bool) -> Vec<String> {
    let p = Painter { color };
    let mut lines = Vec::new();

    lines.push(p.rule(width));
    lines.push(format!(
        "{}{}  {}",
        styling::SECTION_INDENT,
        p.title(styling::TITLE),
        p.section(&report.host.hostname)
    ));
    lines.push(p.rule(width));

    section(&mut lines, &p, "SYSTEM");
    lines.push(p.status("OS", &p.fallback_aware(&report.host.os)));
    lines.push(p.status(
        "Kernel",
        &p.fallback_aware(&format!("{} ({})", report.host.kernel, report.host.arch)),
    ));
    let uptime = report
        .host
        .uptime_seconds
        .map(format_uptime)
        .unwrap_or_else(|| UNKNOWN.to_string());
    lines.push(p.status("Uptime", &p.fallback_aware(&uptime)));
    lines.push(p.status("Node", &report.host.node_version));
    lines.push(p.status("npm", &report.host.npm_version));

    section(&mut lines, &p, "CPU");
    lines.push(p.status("Model", &p.fallback_aware(&report.cpu.model)));
    let cores = report
        .cpu
        .cores
        .map(|n| n.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    lines.push(p.status("Cores", &p.fallback_aware(&cores)));
    let load = report
        .cpu
        .load
        .map(|l| format!("{:.2} {:.2} {:.2}", l.one, l.five, l.fifteen))
        .unwrap_or_else(|| UNKNOWN.to_string());
    lines.push(p.status("Load", &p.fallback_aware(&load)));

    section(&mut lines, &p, "MEMORY");
    match &report.memory {
        Some(memory) => {
            lines.push(p.status("RAM", &usage_line(&p, memory.ram.used, memory.ram.total)));
            let swap = if memory.swap.total == 0 {
                "Disabled".to_string()
            } else {
                usage_line(&p, memory.swap.used, memory.swap.total)
            };
            lines.push(p.status("Swap", &swap));
            if let Some(limit) = memory.limit {
                lines.push(p.status("Limit", &format_bytes(limit)));
            }
        }
        None => lines.push(p.status("RAM", &p.fallback_aware(UNKNOWN))),
    }

    section(&mut lines, &p, "DISK");
    match &report.disk {
        Some(disk) => {
            lines.push(p.status("Mount", &disk.mount));
            lines.push(p.status("Usage", &usage_line(&p, disk.used, disk.total)));
            lines.push(p.status("Free", &format_bytes(disk.available)));
        }
        None => lines.push(p.status("Usage", &p.fallback_aware(UNKNOWN))),
    }

    section(&mut lines, &p, "NETWORK");
    lines.push(p.status("Public IP", &report.network.public_ip));
    lines.push(p.status("Local IP", &p.fallback_aware(&report.network.local_ip)));
    if let Some(allocation) = &report.network.allocation {
        lines.push(p.status("Allocation", allocation));
    }

    lines.push(p.rule(width));
    lines.push(format!(
        "{}{}",
        styling::SECTION_INDENT,
        p.muted(&report.generated_at.format("%Y-%m-%d %H:%M:%S %Z").to_string())
    ));
    lines.push(String::new());
    lines
}

fn section(lines: &mut Vec<String>, p: &Painter, title: &str) {
    lines.push(String::new());
    lines.push(format!("{}{}", styling::SECTION_INDENT, p.section(title)));
}

fn usage_line(p: &Painter, used: u64, total: u64) -> String {
    format!(
        "{} {}",
        p.bar(usage_fraction(used, total)),
        format_usage(used, total)
    )
}

/// Prints the banner to stdout.
pub fn print_banner(report: &SystemReport) {
    for line in render_banner(report, banner_width(), should_use_color()) {
        println!("{line}");
    }
}

/// Print a launcher step (`» Installing project dependencies`)
pub fn print_step(message: &str) {
    if should_use_color() {
        println!("{} {}", styling::STEP_SYMBOL, message.bold());
    } else {
        println!("{} {}", styling::STEP_SYMBOL, message);
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    if should_use_color() {
        println!("{} {}", styling::SUCCESS_SYMBOL, message.green());
    } else {
        println!("{} {}", styling::SUCCESS_SYMBOL, message);
    }
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    if should_use_color() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {message}");
    }
}
