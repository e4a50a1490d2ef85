//! Tap-Queue: Übergabe von Touch-Downs vom Input-Thread an den Frame-Thread.
//!
//! FIFO, unbegrenzt, nie blockierend. Pro Frame wird höchstens ein Tap
//! entnommen, weitere bleiben für die folgenden Frames liegen.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Ein beim Touch-Down erfasster Tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedTap {
    /// Screen-Position in Pixeln
    pub screen_pos: Vec2,
    /// Fortlaufende Event-ID (Identität für Logging/Freigabe)
    pub event_id: u64,
}

/// Producer-Seite der Queue, klonbar und an andere Threads übergebbar.
#[derive(Clone)]
pub struct TapSender {
    tx: Sender<QueuedTap>,
    next_id: Arc<AtomicU64>,
}

impl TapSender {
    /// Reiht einen Tap ein. Gibt `false` zurück, wenn die Queue nicht mehr existiert.
    pub fn enqueue(&self, screen_pos: Vec2) -> bool {
        let event_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.tx
            .send(QueuedTap {
                screen_pos,
                event_id,
            })
            .is_ok()
    }
}

/// Consumer-Seite der Queue, gehört dem Frame-Thread.
pub struct TapQueue {
    sender: TapSender,
    rx: Receiver<QueuedTap>,
}

impl TapQueue {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            sender: TapSender {
                tx,
                next_id: Arc::new(AtomicU64::new(1)),
            },
            rx,
        }
    }

    /// Liefert einen Producer-Handle für den Input-Thread.
    pub fn sender(&self) -> TapSender {
        self.sender.clone()
    }

    /// Reiht einen Tap ein (Kurzform für `sender().enqueue(..)`).
    pub fn enqueue(&self, screen_pos: Vec2) {
        // Die Queue hält selbst einen Receiver, Senden kann hier nicht scheitern.
        let _ = self.sender.enqueue(screen_pos);
    }

    /// Entnimmt den ältesten Tap, ohne zu blockieren.
    pub fn dequeue_one(&self) -> Option<QueuedTap> {
        match self.rx.try_recv() {
            Ok(tap) => Some(tap),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Anzahl wartender Taps.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Gibt `true` zurück, wenn kein Tap wartet.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Verwirft alle wartenden Taps und gibt deren Anzahl zurück.
    pub fn clear(&self) -> usize {
        self.rx.try_iter().count()
    }
}

impl Default for TapQueue {
    fn default() -> Self {
        Self::new()
    }
}
