// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Imported {} ({}/{})", label, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.failed += 1;
        self.set_status(format!("Skipped {}: {} ({}/{})", label, reason, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Import complete")); // no counts if we never began
        } else if self.failed == 0 {
            self.set_status(format!("Import complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!(
                "Import complete ({}/{}, {} failed)",
                self.done, self.total, self.failed
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reports_failures() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(3);
        p.item_done("a");
        p.item_failed("b", "bad score");
        assert!(status.lock().unwrap().starts_with("Skipped b: bad score (2/3)"));
        p.item_done("c");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Import complete (2/3, 1 failed)");
    }
}
