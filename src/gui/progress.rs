// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use crate::extract::Category;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
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
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn fetched(&mut self, url: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", url, self.done, self.total));
    }
    fn category_done(&mut self, category: Category, count: usize) {
        self.done += 1;
        self.set_status(format!(
            "Scraped {} {} ({}/{})",
            count, category.label(), self.done, self.total
        ));
    }
    fn finish(&mut self) {
        if self.done < self.total {
            self.set_status(s!("Scrape stopped"));
        } else {
            self.set_status(s!("Data scraped successfully!"));
        }
    }
}
