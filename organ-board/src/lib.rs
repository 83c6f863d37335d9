#![no_std]

use embassy_stm32::{bind_interrupts, peripherals, usart};

pub mod config;
pub mod pins;
pub mod tasks;

bind_interrupts!(pub struct SystemIrqs {
    USART1 => usart::InterruptHandler<peripherals::USART1>;
});
