use super::{Frame, Region, ViewPort};
use crate::core::countdown::CountdownFields;
use crate::core::renderer::{self, TimelineContent};
use crate::errors::AppResult;
use crate::models::document::Station;
use crate::models::tab::Tab;
use crate::utils::colors::{self, BOLD, CLEAR, GREEN, INVERSE, MAGENTA, YELLOW};
use crate::utils::formatting::{bold, separator};
use std::io::Write;

pub const DEFAULT_NOTICE: &str = "Denk daran, die Nahverkehrs-App vor der Reise zu installieren und zu prüfen.";

#[derive(Debug, Clone)]
pub struct TerminalOptions {
    pub width: usize,
    pub color: bool,
    /// Redraw the whole screen on every present (watch mode).
    pub clear: bool,
    /// Print the key help line under the frame.
    pub help: bool,
    pub notice_text: String,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            width: 72,
            color: true,
            clear: false,
            help: false,
            notice_text: DEFAULT_NOTICE.to_string(),
        }
    }
}

/// Draws a [`Frame`] as text on any writer (stdout in the binary).
pub struct TerminalView<W: Write> {
    frame: Frame,
    out: W,
    opts: TerminalOptions,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, regions: &[Region], opts: TerminalOptions) -> Self {
        Self {
            frame: Frame::with_regions(regions),
            out,
            opts,
        }
    }
}

impl<W: Write> ViewPort for TerminalView<W> {
    fn set_time(&mut self, text: &str) -> AppResult<()> {
        self.frame.set_time(text)
    }

    fn set_tabs(&mut self, tabs: &[Tab], active: Tab) -> AppResult<()> {
        self.frame.set_tabs(tabs, active)
    }

    fn set_views_visible(&mut self, timeline: bool, stations: bool) -> AppResult<()> {
        self.frame.set_views_visible(timeline, stations)
    }

    fn set_timeline_content(&mut self, content: &TimelineContent) -> AppResult<()> {
        self.frame.set_timeline_content(content)
    }

    fn set_stations(&mut self, stations: &[Station]) -> AppResult<()> {
        self.frame.set_stations(stations)
    }

    fn set_countdown_fields(&mut self, fields: &CountdownFields) -> AppResult<()> {
        self.frame.set_countdown_fields(fields)
    }

    fn set_countdown_visible(&mut self, visible: bool) -> AppResult<()> {
        self.frame.set_countdown_visible(visible)
    }

    fn set_notice_visible(&mut self, visible: bool) -> AppResult<()> {
        self.frame.set_notice_visible(visible)
    }

    fn present(&mut self) -> AppResult<()> {
        if self.opts.clear {
            write!(self.out, "{CLEAR}")?;
        }
        writeln!(self.out, "{}", draw(&self.frame, &self.opts))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Full text of a frame.
pub fn draw(frame: &Frame, opts: &TerminalOptions) -> String {
    let w = opts.width;
    let c = opts.color;
    let line = separator('─', w);
    let mut out: Vec<String> = Vec::new();

    if let Some(time) = &frame.time {
        out.push(format!("🕐 {time}"));
    }

    if let Some(active) = frame.active_tab {
        let tabs: Vec<String> = frame
            .tabs
            .iter()
            .map(|t| {
                if *t == active {
                    colors::paint(&format!("[{}]", t.label()), INVERSE, c)
                } else {
                    format!(" {} ", t.label())
                }
            })
            .collect();
        out.push(tabs.join(" "));
    }

    if frame.has(Region::Countdown) && frame.countdown_visible {
        if let Some(cd) = &frame.countdown {
            out.push(line.clone());
            out.push(format!("⏳ {}", colors::paint(&cd.label, YELLOW, c)));
            out.push(format!(
                "   {} Tage  {} Std  {} Min  {} Sek",
                colors::paint(&cd.days, BOLD, c),
                colors::paint(&cd.hours, BOLD, c),
                colors::paint(&cd.minutes, BOLD, c),
                colors::paint(&cd.seconds, BOLD, c),
            ));
        }
    }

    out.push(line.clone());

    if frame.timeline_visible {
        if let Some(content) = &frame.timeline {
            out.push(renderer::layout_timeline(content, w, c));
        }
    } else if frame.stations_visible {
        out.push(draw_stations(&frame.stations, c));
    }

    if frame.has(Region::Notice) && frame.notice_visible {
        out.push(line.clone());
        out.push(colors::paint(&format!("📱 {}", opts.notice_text), MAGENTA, c));
        out.push("   [ok] erledigt, nicht mehr anzeigen · [x] schließen".to_string());
    }

    if opts.help {
        out.push(line);
        let keys: Vec<String> = frame.tabs.iter().map(|t| t.to_string()).collect();
        out.push(format!("Eingabe: {} · q beenden", keys.join(" / ")));
    }

    out.join("\n")
}

fn draw_stations(stations: &[Station], color: bool) -> String {
    if stations.is_empty() {
        return "Keine Stationen hinterlegt".to_string();
    }

    let mut out = Vec::new();
    for s in stations {
        let name = if color { bold(&s.name) } else { s.name.clone() };
        out.push(format!("🚉 {name}"));
        if !s.lines.is_empty() {
            out.push(format!(
                "   {}",
                colors::paint(&s.lines.join(", "), GREEN, color)
            ));
        }
        if let Some(note) = &s.note {
            out.push(format!("   {note}"));
        }
    }
    out.join("\n")
}
