use embassy_stm32::peripherals::*;
use embassy_sync::{
    blocking_mutex::raw::ThreadModeRawMutex,
    pubsub::{PubSubChannel, Publisher, Subscriber},
};

///////////////
//  speaker  //
///////////////

pub type SpeakerPin = PC6;

///////////////
//  User IO  //
///////////////

pub type ReadyLedPin = PB1;
pub type ComsErrorLedPin = PB0;

////////////
//  coms  //
////////////

pub type ComsUart = USART1;
pub type ComsUartTxPin = PA9;
pub type ComsUartRxPin = PA10;
pub type ComsDmaTx = DMA1_CH1;
pub type ComsDmaRx = DMA1_CH2;

//////////////////////////////
//  Communication Channels  //
//////////////////////////////

// keystrokes received while a note is sounding wait here
const KEY_EVENT_CHANNEL_DEPTH: usize = 16;
const KEY_EVENT_CHANNEL_NUM_SUBS: usize = 1;
const KEY_EVENT_CHANNEL_NUM_PUBS: usize = 1;
pub type KeyEventPubSub = PubSubChannel<
    ThreadModeRawMutex,
    u8,
    KEY_EVENT_CHANNEL_DEPTH,
    KEY_EVENT_CHANNEL_NUM_SUBS,
    KEY_EVENT_CHANNEL_NUM_PUBS,
>;
pub type KeyEventPublisher = Publisher<
    'static,
    ThreadModeRawMutex,
    u8,
    KEY_EVENT_CHANNEL_DEPTH,
    KEY_EVENT_CHANNEL_NUM_SUBS,
    KEY_EVENT_CHANNEL_NUM_PUBS,
>;
pub type KeyEventSubscriber = Subscriber<
    'static,
    ThreadModeRawMutex,
    u8,
    KEY_EVENT_CHANNEL_DEPTH,
    KEY_EVENT_CHANNEL_NUM_SUBS,
    KEY_EVENT_CHANNEL_NUM_PUBS,
>;
