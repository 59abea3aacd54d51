//! Bridge: remote controls (abstraction) driving LED TVs (implementation).
//!
//! Remotes and TVs vary independently. Any [`Remote`] can drive any
//! [`LedTv`] because the remote owns its TV through composition.

/// Implementation side of the bridge.
pub trait LedTv {
    /// Brand printed in every status line.
    fn brand(&self) -> &'static str;

    fn switch_on(&self) -> String {
        format!("Switch on : {} TV", self.brand())
    }

    fn switch_off(&self) -> String {
        format!("Switch off : {} TV", self.brand())
    }

    fn set_channel(&self, channel: u16) -> String {
        format!("Setting channel number : {channel} on {} TV", self.brand())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SamsungLedTv;

impl LedTv for SamsungLedTv {
    fn brand(&self) -> &'static str {
        "Samsung"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SonyLedTv;

impl LedTv for SonyLedTv {
    fn brand(&self) -> &'static str {
        "Sony"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HitachiLedTv;

impl LedTv for HitachiLedTv {
    fn brand(&self) -> &'static str {
        "Hitachi"
    }

    // Hitachi sets show the channel with a leading zero.
    fn set_channel(&self, channel: u16) -> String {
        format!("Setting channel number : {channel:02} on Hitachi TV")
    }
}

/// Abstraction side of the bridge.
pub trait Remote {
    fn tv(&self) -> &dyn LedTv;

    fn switch_on(&self) -> String {
        self.tv().switch_on()
    }

    fn switch_off(&self) -> String {
        self.tv().switch_off()
    }

    fn set_channel(&mut self, channel: u16) -> String {
        self.tv().set_channel(channel)
    }
}

/// Plain remote that forwards every button.
pub struct RemoteControl {
    tv: Box<dyn LedTv>,
}

impl RemoteControl {
    pub fn new(tv: Box<dyn LedTv>) -> Self {
        Self { tv }
    }
}

impl Remote for RemoteControl {
    fn tv(&self) -> &dyn LedTv {
        self.tv.as_ref()
    }
}

/// Refined abstraction: remembers the last channel and can jump back to it.
pub struct FavouriteRemote {
    tv: Box<dyn LedTv>,
    current: Option<u16>,
    favourite: u16,
}

impl FavouriteRemote {
    pub fn new(tv: Box<dyn LedTv>, favourite: u16) -> Self {
        Self {
            tv,
            current: None,
            favourite,
        }
    }

    /// Jump to the favourite channel.
    pub fn favourite(&mut self) -> String {
        let channel = self.favourite;
        self.set_channel(channel)
    }

    pub fn current(&self) -> Option<u16> {
        self.current
    }
}

impl Remote for FavouriteRemote {
    fn tv(&self) -> &dyn LedTv {
        self.tv.as_ref()
    }

    fn set_channel(&mut self, channel: u16) -> String {
        self.current = Some(channel);
        self.tv.set_channel(channel)
    }
}
