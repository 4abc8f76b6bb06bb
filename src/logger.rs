use chrono::Local;

use super::constant;
use super::fetcher::ListenerCount;

pub struct Logger {
    previous: Option<ListenerCount>,
}

impl Logger {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { previous: None }
    }

    //e.g. `listeners: 12 (+3)`
    fn format(&self, count: Option<ListenerCount>) -> String {
        match count {
            None => format!(
                "{}listeners: unavailable{}",
                constant::COLOR_RED,
                constant::NO_COLOR
            ),
            Some(c) => {
                let delta = match self.previous {
                    Some(p) if (c > p) => format!(" (+{})", c - p),
                    Some(p) if (c < p) => format!(" (-{})", p - c),
                    _ => String::new(),
                };
                format!(
                    "{}listeners: {}{}{}",
                    constant::COLOR_GREEN,
                    c,
                    delta,
                    constant::NO_COLOR
                )
            }
        }
    }

    //An unavailable count doesn't reset the previous one so that the next delta is still meaningful.
    pub fn log(&mut self, count: Option<ListenerCount>) {
        println!(
            "{}[{}]{} {}",
            constant::COLOR_BLACK,
            Local::now().format("%H:%M:%S"),
            constant::NO_COLOR,
            self.format(count),
        );
        if (count.is_some()) {
            self.previous = count;
        }
    }
}
