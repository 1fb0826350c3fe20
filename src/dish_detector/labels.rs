/// Dish names indexed by class identifier.
pub const DISH_NAMES: [&str; 26] = [
    "Biryani",
    "Cake",
    "Chicken Bun",
    "Chicken Fry",
    "Chips",
    "Cookies",
    "Custard",
    "Dry Pepper Chicken",
    "Fish Kabab",
    "French Fry",
    "Fried rice with Chilli Chicken",
    "Kabab",
    "Kacchi",
    "Khichuri",
    "Momo",
    "Nawabi Shemai",
    "Nuggets",
    "Pasta",
    "Payesh",
    "Pizza",
    "Roshlmalai",
    "Sauce",
    "Shahi Tukra",
    "Spring Rolls",
    "Tiramisu",
    "noodles",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: [u8; 3],
    pub to: [u8; 3],
}

impl Gradient {
    pub const fn hex(from: u32, to: u32) -> Self {
        Self {
            from: rgb(from),
            to: rgb(to),
        }
    }
}

const fn rgb(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

pub const DEFAULT_STYLE: Gradient = Gradient::hex(0x9ca3af, 0x4b5563);

/// Row styling, parallel to [`DISH_NAMES`].
pub const DISH_STYLES: [Gradient; 26] = [
    Gradient::hex(0xf87171, 0xdc2626),
    Gradient::hex(0xf9a8d4, 0xec4899),
    Gradient::hex(0xfacc15, 0xca8a04),
    Gradient::hex(0xfb923c, 0xea580c),
    Gradient::hex(0x818cf8, 0x4f46e5),
    Gradient::hex(0xd8b4fe, 0xa855f7),
    Gradient::hex(0x86efac, 0x22c55e),
    Gradient::hex(0x2dd4bf, 0x0d9488),
    Gradient::hex(0x60a5fa, 0x2563eb),
    Gradient::hex(0xf472b6, 0xdb2777),
    Gradient::hex(0xc084fc, 0x9333ea),
    Gradient::hex(0xfca5a5, 0xef4444),
    Gradient::hex(0xfde047, 0xeab308),
    Gradient::hex(0x4ade80, 0x16a34a),
    Gradient::hex(0x93c5fd, 0x3b82f6),
    Gradient::hex(0xfbcfe8, 0xf472b6),
    Gradient::hex(0x5eead4, 0x14b8a6),
    Gradient::hex(0xfdba74, 0xf97316),
    Gradient::hex(0xa5b4fc, 0x6366f1),
    Gradient::hex(0xe9d5ff, 0xc084fc),
    Gradient::hex(0xfecaca, 0xf87171),
    Gradient::hex(0xfef08a, 0xfacc15),
    Gradient::hex(0xbbf7d0, 0x4ade80),
    Gradient::hex(0xbfdbfe, 0x60a5fa),
    Gradient::hex(0xfce7f3, 0xf9a8d4),
    Gradient::hex(0xf3e8ff, 0xd8b4fe),
];

pub fn dish_name(class_id: usize) -> Option<&'static str> {
    DISH_NAMES.get(class_id).copied()
}

pub fn dish_style(class_id: usize) -> Gradient {
    DISH_STYLES.get(class_id).copied().unwrap_or(DEFAULT_STYLE)
}
