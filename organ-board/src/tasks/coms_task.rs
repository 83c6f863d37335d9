use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::usart::{self, Uart, UartRx, UartTx};

use crate::config::{COMS_BAUD_RATE, ORGAN_BANNER, ORGAN_PROMPT};
use crate::pins::*;
use crate::SystemIrqs;

#[macro_export]
macro_rules! create_coms_task {
    ($spawner:ident, $p:ident, $key_events:ident) => {
        organ_board::tasks::coms_task::start_coms_task(
            &$spawner,
            &$key_events,
            $p.USART1,
            $p.PA10,
            $p.PA9,
            $p.DMA1_CH1,
            $p.DMA1_CH2,
            $p.PB0,
        );
    };
}

fn key_ack(trigger: u8) -> [u8; 7] {
    // tells the sender the byte arrived and the next one may follow
    [b'N', b' ', b'-', b' ', trigger, b'\r', b'\n']
}

async fn run_coms(
    tx: &mut UartTx<'static, ComsUart, ComsDmaTx>,
    rx: &mut UartRx<'static, ComsUart, ComsDmaRx>,
    key_publisher: &KeyEventPublisher,
) -> Result<(), usart::Error> {
    tx.write(ORGAN_BANNER).await?;
    tx.write(ORGAN_PROMPT).await?;

    let mut ch = [0u8; 1];
    loop {
        rx.read(&mut ch).await?;

        // acknowledge receipt before the byte is interpreted
        tx.write(&key_ack(ch[0])).await?;
        key_publisher.publish(ch[0]).await;
    }
}

#[embassy_executor::task]
async fn coms_task_entry(
    mut tx: UartTx<'static, ComsUart, ComsDmaTx>,
    mut rx: UartRx<'static, ComsUart, ComsDmaRx>,
    key_publisher: KeyEventPublisher,
    mut comm_error_led: Output<'static, ComsErrorLedPin>,
) {
    if let Err(err) = run_coms(&mut tx, &mut rx, &key_publisher).await {
        defmt::error!("uart communication error: {}, keyboard halted", err);
    }

    // fatal: latch the indicator and never touch the uart again
    comm_error_led.set_high();
    core::future::pending::<()>().await;
}

pub fn start_coms_task(
    spawner: &Spawner,
    key_events: &'static KeyEventPubSub,
    uart: ComsUart,
    uart_rx_pin: ComsUartRxPin,
    uart_tx_pin: ComsUartTxPin,
    uart_tx_dma: ComsDmaTx,
    uart_rx_dma: ComsDmaRx,
    comm_error_led_pin: ComsErrorLedPin,
) {
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = COMS_BAUD_RATE;
    let coms_uart = Uart::new(
        uart,
        uart_rx_pin,
        uart_tx_pin,
        SystemIrqs,
        uart_tx_dma,
        uart_rx_dma,
        uart_config,
    )
    .unwrap();
    let (tx, rx) = coms_uart.split();

    let comm_error_led = Output::new(comm_error_led_pin, Level::Low, Speed::Low);
    let key_publisher = key_events.publisher().unwrap();

    spawner
        .spawn(coms_task_entry(tx, rx, key_publisher, comm_error_led))
        .expect("failed to spawn coms task");
}
