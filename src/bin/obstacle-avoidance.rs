#![no_main]
#![no_std]

use async_avoidance::{Controller, ControllerConfig, Mode, Recovery};
use async_kartoffel::{
    println, Bot, Duration, Instant, KartoffelDelay, MotorDrive, RadarRange, Timer,
};
use embassy_executor::{task, Executor};
use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel, signal::Signal};
use static_cell::StaticCell;

#[cfg(feature = "slow")]
const INITIAL_MODE: Mode = Mode::Slow;
#[cfg(not(feature = "slow"))]
const INITIAL_MODE: Mode = Mode::Fast;

type Avoider = Controller<RadarRange, MotorDrive, KartoffelDelay>;
type RecoveryChannel = Channel<NoopRawMutex, TickReport, 16>;

struct TickReport {
    tick: u32,
    recovery: Recovery,
}

#[unsafe(no_mangle)]
fn main() {
    static EXECUTOR: StaticCell<Executor> = StaticCell::new();
    static CHANNEL_RECOVERY: StaticCell<RecoveryChannel> = StaticCell::new();
    static SIGNAL_TICK: StaticCell<Signal<NoopRawMutex, u32>> = StaticCell::new();

    let executor = EXECUTOR.init(Executor::new());
    let channel_recovery = CHANNEL_RECOVERY.init(Channel::new());
    let signal_tick = SIGNAL_TICK.init(Signal::new());

    let bot = Bot::take();
    let config = ControllerConfig::DEFAULT.with_initial_mode(INITIAL_MODE);
    let controller = Controller::with_config(config, bot.range, bot.drive, bot.delay);

    println!("obstacle avoidance, {:?} mode", INITIAL_MODE);

    executor.run(|spawner| {
        spawner
            .spawn(control(controller, channel_recovery, signal_tick))
            .unwrap();
        spawner.spawn(report(channel_recovery, signal_tick)).unwrap();
    })
}

/// Queues every tick that had to recover, waiting for room if the reporter falls behind.
#[task]
async fn control(
    mut controller: Avoider,
    channel_recovery: &'static RecoveryChannel,
    signal_tick: &'static Signal<NoopRawMutex, u32>,
) -> ! {
    controller.initialize();
    let mut tick: u32 = 0;
    loop {
        let recovery = controller.run_each_loop().await;
        tick = tick.wrapping_add(1);
        if recovery != Recovery::Clear {
            channel_recovery.send(TickReport { tick, recovery }).await;
        }
        signal_tick.signal(tick);
    }
}

/// Prints each queued recovery, and once a second a heartbeat with the latest tick count.
#[task]
async fn report(
    channel_recovery: &'static RecoveryChannel,
    signal_tick: &'static Signal<NoopRawMutex, u32>,
) -> ! {
    let period = Duration::from_millis(1_000);
    let mut next_heartbeat = Instant::now() + period;
    let mut last_tick = 0;
    loop {
        match select(channel_recovery.receive(), Timer::at(next_heartbeat)).await {
            Either::First(TickReport { tick, recovery }) => {
                println!("tick {}: {}", tick, recovery);
            }
            Either::Second(_) => {
                next_heartbeat += period;
                if let Some(tick) = signal_tick.try_take() {
                    last_tick = tick;
                }
                println!("alive, {} ticks", last_tick);
            }
        }
    }
}
