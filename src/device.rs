//! A device abstraction that runs the clock controller on embassy.
#![cfg(feature = "embassy")]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::convert::Infallible;

use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

use crate::Result;
use crate::controller::{ButtonEdge, ClockController, ClockEvent, DisplayFrame};
use crate::field_adjuster::Direction;
use crate::shared::SharedClock;

// ============================================================================
// Constants
// ============================================================================

/// Duration representing one second.
pub const ONE_SECOND: Duration = Duration::from_secs(1);

// ============================================================================
// Types
// ============================================================================

/// Input events sent to the clock device by the button and touch drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum InputEvent {
    /// A debounced press edge.
    Button(ButtonEdge),
    /// The touch slider is held on its + or - side.
    Touch(Direction),
}

/// Channel type for clock inputs.
type ClockInputs = Channel<CriticalSectionRawMutex, InputEvent, 4>;
/// Signal type for the latest frame to draw.
type ClockFrames = Signal<CriticalSectionRawMutex, DisplayFrame>;

// ============================================================================
// Clock Virtual Device
// ============================================================================

/// Resources needed by [`ClockDevice`]
pub struct ClockDeviceStatic {
    clock: SharedClock,
    inputs: ClockInputs,
    frames: ClockFrames,
}

/// A device abstraction that keeps time, applies user adjustments, and emits frames.
pub struct ClockDevice {
    clock: &'static SharedClock,
    inputs: &'static ClockInputs,
    frames: &'static ClockFrames,
}

impl ClockDevice {
    /// Create [`ClockDevice`] resources
    #[must_use]
    pub const fn new_static(controller: ClockController) -> ClockDeviceStatic {
        ClockDeviceStatic {
            clock: SharedClock::new(controller),
            inputs: Channel::new(),
            frames: Signal::new(),
        }
    }

    /// Create a new [`ClockDevice`] and spawn its task
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskSpawn`](crate::Error::TaskSpawn) if the task is already running.
    pub fn new(clock_static: &'static ClockDeviceStatic, spawner: Spawner) -> Result<Self> {
        let token = clock_device_loop(clock_static)?;
        spawner.spawn(token);
        Ok(Self {
            clock: &clock_static.clock,
            inputs: &clock_static.inputs,
            frames: &clock_static.frames,
        })
    }

    /// Wait for and return the next frame to draw
    pub async fn wait(&self) -> DisplayFrame {
        self.frames.wait().await
    }

    /// The current frame, without waiting.
    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        self.clock.frame()
    }

    /// Send a debounced button edge to the clock
    pub async fn press(&self, edge: ButtonEdge) {
        self.inputs.send(InputEvent::Button(edge)).await;
    }

    /// Send a touch-slider step to the clock
    pub async fn touch(&self, direction: Direction) {
        self.inputs.send(InputEvent::Touch(direction)).await;
    }
}

#[embassy_executor::task]
async fn clock_device_loop(resources: &'static ClockDeviceStatic) -> ! {
    let err = inner_clock_device_loop(resources).await;
    match err {}
}

async fn inner_clock_device_loop(resources: &'static ClockDeviceStatic) -> Infallible {
    info!("Clock device started at {}", resources.clock.now().as_u32());
    let mut ticker = Ticker::every(ONE_SECOND);

    loop {
        resources.frames.signal(resources.clock.frame());

        let event = match select(ticker.next(), resources.inputs.receive()).await {
            Either::First(()) => resources.clock.on_tick(),
            Either::Second(InputEvent::Button(edge)) => resources.clock.on_button(edge),
            Either::Second(InputEvent::Touch(direction)) => resources.clock.on_touch(direction),
        };

        if !matches!(event, ClockEvent::Ticked | ClockEvent::Ignored) {
            info!("Clock event: {:?}", event);
        }
    }
}
