//! Terminal UI utilities.
//!
//! A small box-drawing table used by `vendo doctor`, sized to the terminal.

use colored::*;
use std::cmp;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let (_height, term_width) = console::Term::stdout().size();
        let max_width = term_width as usize;

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| h.chars().count())
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let visible = console::strip_ansi_codes(cell).chars().count();
                widths[i] = cmp::max(widths[i], visible);
            }
        }

        // Shrink the widest column until the table fits the terminal.
        let overhead = 3 + 3 * self.headers.len();
        while overhead + widths.iter().sum::<usize>() > max_width {
            let widest = widths
                .iter()
                .enumerate()
                .max_by_key(|(_, w)| **w)
                .map(|(i, _)| i)
                .unwrap_or(0);
            if widths[widest] <= 8 {
                break;
            }
            widths[widest] -= 1;
        }

        let sep = |left: &str, mid: &str, right: &str| {
            let mut s = String::from("  ");
            s.push_str(left);
            for (i, width) in widths.iter().enumerate() {
                s.push_str(&"─".repeat(width + 2));
                s.push_str(if i + 1 < widths.len() { mid } else { right });
            }
            s
        };

        println!("{}", sep("┌", "┬", "┐"));
        print!("  │");
        for (i, header) in self.headers.iter().enumerate() {
            print_cell(&header.bold().to_string(), widths[i]);
        }
        println!();
        println!("{}", sep("├", "┼", "┤"));
        for row in &self.rows {
            print!("  │");
            for (i, cell) in row.iter().enumerate() {
                print_cell(cell, widths[i]);
            }
            println!();
        }
        println!("{}", sep("└", "┴", "┘"));
    }
}

fn print_cell(cell: &str, width: usize) {
    let truncated = console::truncate_str(cell, width, "...").to_string();
    let visible = console::strip_ansi_codes(&truncated).chars().count();
    print!(" {} {}│", truncated, " ".repeat(width.saturating_sub(visible)));
}
