//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

#[component]
fn IconSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn PlayIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M5 5a2 2 0 0 1 3.008-1.728l11.997 6.998a2 2 0 0 1 .003 3.458l-12 7A2 2 0 0 1 5 19z" }
        }
    }
}

#[component]
pub fn PauseIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            rect {
                x: "14",
                y: "3",
                width: "5",
                height: "18",
                rx: "1",
            }
            rect {
                x: "5",
                y: "3",
                width: "5",
                height: "18",
                rx: "1",
            }
        }
    }
}

/// Speaker with sound waves
#[component]
pub fn VolumeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298z" }
            path { d: "M16 9a5 5 0 0 1 0 6" }
            path { d: "M19.364 18.364a9 9 0 0 0 0-12.728" }
        }
    }
}

/// Speaker crossed out
#[component]
pub fn VolumeMutedIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298z" }
            line {
                x1: "22",
                x2: "16",
                y1: "9",
                y2: "15",
            }
            line {
                x1: "16",
                x2: "22",
                y1: "9",
                y2: "15",
            }
        }
    }
}

#[component]
pub fn MaximizeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M8 3H5a2 2 0 0 0-2 2v3" }
            path { d: "M21 8V5a2 2 0 0 0-2-2h-3" }
            path { d: "M3 16v3a2 2 0 0 0 2 2h3" }
            path { d: "M16 21h3a2 2 0 0 0 2-2v-3" }
        }
    }
}

#[component]
pub fn MinimizeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M8 3v3a2 2 0 0 1-2 2H3" }
            path { d: "M21 8h-3a2 2 0 0 1-2-2V3" }
            path { d: "M3 16h3a2 2 0 0 1 2 2v3" }
            path { d: "M16 21v-3a2 2 0 0 1 2-2h3" }
        }
    }
}

#[component]
pub fn ZoomInIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            circle { cx: "11", cy: "11", r: "8" }
            line {
                x1: "21",
                x2: "16.65",
                y1: "21",
                y2: "16.65",
            }
            line {
                x1: "11",
                x2: "11",
                y1: "8",
                y2: "14",
            }
            line {
                x1: "8",
                x2: "14",
                y1: "11",
                y2: "11",
            }
        }
    }
}

#[component]
pub fn ZoomOutIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            circle { cx: "11", cy: "11", r: "8" }
            line {
                x1: "21",
                x2: "16.65",
                y1: "21",
                y2: "16.65",
            }
            line {
                x1: "8",
                x2: "14",
                y1: "11",
                y2: "11",
            }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn EyeIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

#[component]
pub fn EyeOffIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49" }
            path { d: "M14.084 14.158a3 3 0 0 1-4.242-4.242" }
            path { d: "M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143" }
            path { d: "m2 2 20 20" }
        }
    }
}

#[component]
pub fn LogOutIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4" }
            polyline { points: "16 17 21 12 16 7" }
            line {
                x1: "21",
                x2: "9",
                y1: "12",
                y2: "12",
            }
        }
    }
}

#[component]
pub fn LayoutGridIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            rect {
                width: "7",
                height: "7",
                x: "3",
                y: "3",
                rx: "1",
            }
            rect {
                width: "7",
                height: "7",
                x: "14",
                y: "3",
                rx: "1",
            }
            rect {
                width: "7",
                height: "7",
                x: "14",
                y: "14",
                rx: "1",
            }
            rect {
                width: "7",
                height: "7",
                x: "3",
                y: "14",
                rx: "1",
            }
        }
    }
}

#[component]
pub fn CalendarIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            rect {
                width: "18",
                height: "18",
                x: "3",
                y: "4",
                rx: "2",
            }
            path { d: "M3 10h18" }
        }
    }
}

#[component]
pub fn BarChartIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M3 3v16a2 2 0 0 0 2 2h16" }
            path { d: "M18 17V9" }
            path { d: "M13 17V5" }
            path { d: "M8 17v-3" }
        }
    }
}

#[component]
pub fn SaveIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z" }
            path { d: "M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7" }
            path { d: "M7 3v4a1 1 0 0 0 1 1h7" }
        }
    }
}

#[component]
pub fn RefreshIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

#[component]
pub fn CheckCircleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn AlertTriangleIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}

#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn ArrowLeftIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m12 19-7-7 7-7" }
            path { d: "M19 12H5" }
        }
    }
}

#[component]
pub fn ChevronRightIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

#[component]
pub fn ExternalLinkIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

/// Loader icon (spinning circle)
#[component]
pub fn LoaderIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        }
    }
}

#[component]
pub fn PlusIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M5 12h14" }
            path { d: "M12 5v14" }
        }
    }
}

#[component]
pub fn TrashIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M3 6h18" }
            path { d: "M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6" }
            path { d: "M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2" }
        }
    }
}

#[component]
pub fn PencilIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z" }
            path { d: "m15 5 4 4" }
        }
    }
}

#[component]
pub fn FileTextIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
            path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
            path { d: "M10 9H8" }
            path { d: "M16 13H8" }
            path { d: "M16 17H8" }
        }
    }
}

#[component]
pub fn MenuIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            line {
                x1: "4",
                x2: "20",
                y1: "12",
                y2: "12",
            }
            line {
                x1: "4",
                x2: "20",
                y1: "6",
                y2: "6",
            }
            line {
                x1: "4",
                x2: "20",
                y1: "18",
                y2: "18",
            }
        }
    }
}

#[component]
pub fn ChevronDownIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}

#[component]
pub fn TagIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z" }
            circle { cx: "7.5", cy: "7.5", r: ".5", fill: "currentColor" }
        }
    }
}

#[component]
pub fn InfoIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

/// Gear
#[component]
pub fn SettingsIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

/// Camera body with lens
#[component]
pub fn VideoIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        IconSvg { class,
            path { d: "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5" }
            rect {
                x: "2",
                y: "6",
                width: "14",
                height: "12",
                rx: "2",
            }
        }
    }
}
