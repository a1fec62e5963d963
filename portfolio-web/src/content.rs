pub const BRAND_NAME: &str = "BJ.Beier";
pub const BRAND_TAGLINE: &str = "Problem Solver. Leader. Knowledge Seeker.";
pub const COPYRIGHT: &str = "\u{a9} 2025 BJ Beier. All rights reserved.";
pub const JOKE_PLACEHOLDER: &str = "Loading tech humor...";

pub const PHRASES: &[&str] = &[
    "Chief Information Officer.",
    "Tech Enthusiast.",
    "Home Automation Tinkerer.",
    "Problem Solver.",
    "Family Man.",
];

pub const JOKES: &[&str] = &[
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I would tell you a UDP joke, but you might not get it.",
    "There are 10 types of people in the world: those who understand binary, and those who don't.",
    "Why was the JavaScript developer sad? Because he didn't know how to 'null' his feelings.",
    "How many programmers does it take to change a light bulb? None, that's a hardware problem.",
    "A SQL query walks into a bar, walks up to two tables and asks, 'Can I join you?'",
    "My password is the last 8 digits of Pi.",
    "I'm not lazy, I'm just in energy saving mode.",
];

pub enum NavLink {
    Section(&'static str, &'static str),
    Page(&'static str, &'static str),
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink::Section("About", "#about"),
    NavLink::Section("The Stack", "#stack"),
    NavLink::Section("Projects", "#projects"),
    NavLink::Page("Insights (Blog)", "blog.html"),
    NavLink::Section("The Network", "#network"),
];

/// (label, lucide icon, href)
pub const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("LinkedIn", "linkedin", "https://linkedin.com/in/bjbeier"),
    ("X (Twitter)", "twitter", "https://x.com/bjbeier"),
    ("GitHub", "github", "https://github.com/bjbeier"),
    ("Email", "mail", "mailto:contact@bjbeier.com"),
];
