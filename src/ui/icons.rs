//! Service icon registry
//!
//! Services store a plain string key; this module resolves it to an inline
//! SVG renderer. The set of keys is closed and enumerated here; anything
//! else gets the fallback glyph.

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type IconRenderer = fn() -> Element;

static ICONS: Lazy<HashMap<&'static str, IconRenderer>> = Lazy::new(|| {
    HashMap::from([
        ("Code", icon_code as IconRenderer),
        ("Palette", icon_palette as IconRenderer),
        ("Bot", icon_bot as IconRenderer),
        ("Zap", icon_zap as IconRenderer),
        ("Layers", icon_layers as IconRenderer),
        ("Cpu", icon_cpu as IconRenderer),
        ("Globe", icon_globe as IconRenderer),
        ("Briefcase", icon_briefcase as IconRenderer),
        ("Handshake", icon_handshake as IconRenderer),
        ("TrendingUp", icon_trending_up as IconRenderer),
    ])
});

/// Render the icon for a key, falling back to a generic glyph for keys
/// outside the known set.
pub fn render_icon(key: &str) -> Element {
    let renderer = ICONS.get(key).copied().unwrap_or(icon_fallback as IconRenderer);
    renderer()
}

/// Keys the registry knows about, for editor hints.
pub fn known_keys() -> Vec<&'static str> {
    let mut keys: Vec<_> = ICONS.keys().copied().collect();
    keys.sort_unstable();
    keys
}

fn icon_frame(children: Element) -> Element {
    rsx! {
        svg {
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

fn icon_code() -> Element {
    icon_frame(rsx! {
        polyline { points: "16 18 22 12 16 6" }
        polyline { points: "8 6 2 12 8 18" }
    })
}

fn icon_palette() -> Element {
    icon_frame(rsx! {
        circle { cx: "13.5", cy: "6.5", r: "0.5" }
        circle { cx: "17.5", cy: "10.5", r: "0.5" }
        circle { cx: "8.5", cy: "7.5", r: "0.5" }
        circle { cx: "6.5", cy: "12.5", r: "0.5" }
        path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.65-.74 1.65-1.67 0-.43-.17-.82-.44-1.1-.27-.28-.43-.67-.43-1.1a1.65 1.65 0 0 1 1.65-1.65h1.95c3.04 0 5.5-2.46 5.5-5.5C21.88 6.06 17.43 2 12 2z" }
    })
}

fn icon_bot() -> Element {
    icon_frame(rsx! {
        rect { x: "3", y: "11", width: "18", height: "10", rx: "2" }
        circle { cx: "12", cy: "5", r: "2" }
        path { d: "M12 7v4" }
        line { x1: "8", y1: "16", x2: "8", y2: "16" }
        line { x1: "16", y1: "16", x2: "16", y2: "16" }
    })
}

fn icon_zap() -> Element {
    icon_frame(rsx! {
        polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
    })
}

fn icon_layers() -> Element {
    icon_frame(rsx! {
        polygon { points: "12 2 2 7 12 12 22 7 12 2" }
        polyline { points: "2 17 12 22 22 17" }
        polyline { points: "2 12 12 17 22 12" }
    })
}

fn icon_cpu() -> Element {
    icon_frame(rsx! {
        rect { x: "4", y: "4", width: "16", height: "16", rx: "2" }
        rect { x: "9", y: "9", width: "6", height: "6" }
        path { d: "M9 1v3M15 1v3M9 20v3M15 20v3M1 9h3M1 15h3M20 9h3M20 15h3" }
    })
}

fn icon_globe() -> Element {
    icon_frame(rsx! {
        circle { cx: "12", cy: "12", r: "10" }
        line { x1: "2", y1: "12", x2: "22", y2: "12" }
        path { d: "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" }
    })
}

fn icon_briefcase() -> Element {
    icon_frame(rsx! {
        rect { x: "2", y: "7", width: "20", height: "14", rx: "2" }
        path { d: "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
    })
}

fn icon_handshake() -> Element {
    icon_frame(rsx! {
        path { d: "M11 17l-1.5 1.5a2.12 2.12 0 0 1-3-3L8 14" }
        path { d: "M14 14l1.5 1.5a2.12 2.12 0 0 0 3-3L17 11" }
        path { d: "M2 9l4-4 5 2 4-2 4 4-3 3" }
        path { d: "M8 14l3 3" }
    })
}

fn icon_trending_up() -> Element {
    icon_frame(rsx! {
        polyline { points: "23 6 13.5 15.5 8.5 10.5 1 18" }
        polyline { points: "17 6 23 6 23 12" }
    })
}

fn icon_fallback() -> Element {
    icon_frame(rsx! {
        path { d: "M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2L12 3z" }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_default_service_icons() {
        for service in crate::content::defaults::services() {
            assert!(
                ICONS.contains_key(service.icon.as_str()),
                "missing icon for {}",
                service.icon
            );
        }
    }

    #[test]
    fn test_known_keys_sorted_and_closed() {
        let keys = known_keys();
        assert_eq!(keys.len(), ICONS.len());
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
