#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m::{delay::Delay, peripheral::NVIC};
use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use hal::{
    pac::{self, interrupt},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use dcdrive::control::{MotionProfile, MotorControl};
use dcdrive::drivers::MotorDriver;
use dcdrive::protocol::{Command, LineBuffer, COMMANDS};
use dcdrive::shared::Shared;
use dcdrive::{MotorConfig, ProfileConfig};

mod hw;
use hw::{BoardPins, Console, DirLine, SysDelay, Tim1Ch1, Tim7Tick};

const BAUD: u32 = 115_200;
const LINE_LEN: usize = 64;
/// TIM7 rate; `dcinter` run times are in these ticks.
const TICK_HZ: u32 = 1_000;

type Control = MotorControl<DirLine<'F', 2>, DirLine<'F', 4>, Tim1Ch1, SysDelay, Tim7Tick>;

/// Reached from the console loop and from the TIM7 handler.
static CONTROL: Shared<Control> = Shared::new();

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks. APB prescalers stay at 1, so both timer kernels run at SYSCLK.
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let timer_clk = clocks.sysclk().raw();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOF);

    // USART3 (ST-LINK VCP)
    let usart_cfg = Config {
        baud_rate: BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut console = Console::new(serial);

    // Motor
    let config = MotorConfig::new().with_tick_hz(TICK_HZ);
    let pwm = Tim1Ch1::new(dp.TIM1, pins.motor.pwm, timer_clk, config.pwm_period);
    let tick = Tim7Tick::new(dp.TIM7, timer_clk, config.tick_hz);
    let delay = SysDelay::new(Delay::new(cp.SYST, clocks.sysclk().raw()));

    let driver = MotorDriver::new(
        DirLine::new(pins.motor.in1),
        DirLine::new(pins.motor.in2),
        pwm,
        delay,
        &config,
    );
    let profile = MotionProfile::new(ProfileConfig::new());
    CONTROL.install(MotorControl::new(driver, tick, profile, &config));

    // Only unmask once the handler has something to act on
    unsafe { NVIC::unmask(pac::Interrupt::TIM7) };

    defmt::info!("dcdrive up, sysclk {=u32} Hz", timer_clk);
    console.println("");
    console.println("DC motor console, type help");
    console.prompt();

    let mut line: LineBuffer<LINE_LEN> = LineBuffer::new();
    loop {
        let Some(byte) = console.read_byte() else {
            continue;
        };
        console.echo(byte);

        let Some(parsed) = line.push(byte) else {
            continue;
        };

        let result = match parsed {
            Ok(Command::Help) => {
                print_help(&mut console);
                Ok(())
            }
            Ok(cmd) => {
                defmt::debug!("command {}", cmd);
                // The whole command runs with interrupts masked, up to ~15 s for `dcmotion`.
                // TIM7 is the only enabled interrupt and every command disarms it before it
                // blocks; the console is polled and SysTick delays busy-wait.
                CONTROL.with(|c| c.execute(cmd)).unwrap_or(Ok(()))
            }
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            defmt::warn!("command failed: {}", e);
            let _ = write!(console, "{}\r\n", e);
        }
        console.prompt();
    }
}

fn print_help<U: hal::serial::Instance>(console: &mut Console<U>) {
    for cmd in COMMANDS {
        let _ = write!(console, "{:<10}{:<28}{}\r\n", cmd.name, cmd.usage, cmd.help);
    }
}

#[interrupt]
fn TIM7() {
    if let Some(true) = CONTROL.with(|c| c.on_tick()) {
        defmt::debug!("timed run stopped");
    }
}
