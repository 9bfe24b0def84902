/// Hero elements revealed by the entrance cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPart {
    Subtitle,
    Title,
    CallToAction,
}

impl HeroPart {
    /// Seconds before this part's transition begins.
    pub fn start_offset_s(self) -> f64 {
        match self {
            HeroPart::Subtitle => 0.5,
            HeroPart::Title => 1.0,
            HeroPart::CallToAction => 1.5,
        }
    }

    pub fn transition(self) -> String {
        let delay = self.start_offset_s();
        format!("opacity 1s ease {delay}s, transform 1s ease {delay}s")
    }

    /// Inline style applied to every part at once; the stagger comes from the
    /// per-part transition delay.
    pub fn revealed_style(self) -> String {
        let mut style = format!("transition: {}; opacity: 1;", self.transition());
        if self == HeroPart::Title {
            style.push_str(" transform: translateY(0);");
        }
        style
    }
}
