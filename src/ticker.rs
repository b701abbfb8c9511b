/*
ticker.rs

Copyright 2025 Hervé Quatremain

This file is part of Diskshift.

Diskshift is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Diskshift is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Diskshift. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Fixed-interval timers.
//!
//! A [`Ticker`] sends a [`Tick`] to the event loop channel at a fixed interval, from a dedicated
//! thread.
//! Each time the ticker starts, it gets a new generation number. The event loop only applies the
//! ticks that carry the generation of a running ticker (see [`Ticker::accepts`]), so ticks that
//! are still in the channel when the ticker stops are discarded.

use async_channel::Sender;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use strum_macros::Display;

/// Purpose of a timer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum TimerKind {
    /// Game clock.
    Clock,

    /// Automatic solution playback.
    Playback,
}

/// Timer event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Timer that sent the event.
    pub kind: TimerKind,

    /// Generation of the timer when it sent the event.
    pub generation: u64,
}

/// Restartable fixed-interval timer.
pub struct Ticker<E> {
    /// Purpose of the timer.
    kind: TimerKind,

    /// Delay between two ticks.
    interval: Duration,

    /// Channel to the event loop.
    sender: Sender<E>,

    /// Incremented each time the timer starts.
    generation: u64,

    /// Run flag shared with the timer thread. None when the timer is stopped.
    running: Option<Arc<AtomicBool>>,
}

impl<E: From<Tick> + Send + 'static> Ticker<E> {
    /// Create a [`Ticker`] object. The timer is not started.
    pub fn new(kind: TimerKind, interval: Duration, sender: Sender<E>) -> Self {
        Self {
            kind,
            interval,
            sender,
            generation: 0,
            running: None,
        }
    }

    /// Start the timer. Starting a running timer does nothing.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }
        self.generation += 1;
        debug!("Starting the {} timer (generation {})", self.kind, self.generation);

        let running = Arc::new(AtomicBool::new(true));
        let flag: Arc<AtomicBool> = Arc::clone(&running);
        let sender: Sender<E> = self.sender.clone();
        let interval: Duration = self.interval;
        let tick = Tick {
            kind: self.kind,
            generation: self.generation,
        };
        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if !flag.load(Ordering::Acquire) {
                    break;
                }
                // The event loop is gone
                if sender.send_blocking(E::from(tick)).is_err() {
                    break;
                }
            }
        });
        self.running = Some(running);
    }

    /// Stop the timer. Stopping a stopped timer does nothing.
    pub fn stop(&mut self) {
        if let Some(flag) = self.running.take() {
            debug!("Stopping the {} timer (generation {})", self.kind, self.generation);
            flag.store(false, Ordering::Release);
        }
    }

    /// Start or stop the timer.
    pub fn set_running(&mut self, running: bool) {
        if running {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Whether the timer is running.
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Whether the tick comes from this timer in its current run.
    pub fn accepts(&self, tick: &Tick) -> bool {
        tick.kind == self.kind && self.running.is_some() && tick.generation == self.generation
    }
}

impl<E> Drop for Ticker<E> {
    fn drop(&mut self) {
        if let Some(flag) = self.running.take() {
            flag.store(false, Ordering::Release);
        }
    }
}
