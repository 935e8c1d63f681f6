//! Built-in default content
//!
//! Seed datasets used on first launch and whenever a persisted collection
//! is missing or unreadable. Factory reset restores exactly these.

use crate::types::content::{
    Project, Service, SkillRating, Testimonial, Venture, VentureContact, VentureStat,
};

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Ledgerline".into(),
            description: "A real-time treasury dashboard streaming market and position data with sub-second latency.".into(),
            tags: vec!["Rust".into(), "WebSocket".into(), "Dioxus".into()],
            image_url: "https://picsum.photos/800/600?random=1".into(),
            link: "".into(),
            category: "Fintech".into(),
            client: Some("Meridian Capital".into()),
            year: Some("2024".into()),
            role: Some("Lead Architect".into()),
            challenge: Some("The client needed a million live data points on screen without dropping frames, wrapped in a brand-grade visual identity.".into()),
            solution: Some("We moved aggregation into a background worker pool and rendered the hot path through a GPU-backed chart surface.".into()),
        },
        Project {
            id: 2,
            title: "Atrium Copilot".into(),
            description: "An AI drafting workspace that weaves generated copy directly into the editor as you type.".into(),
            tags: vec!["TypeScript".into(), "Gemini API".into(), "CRDT".into()],
            image_url: "https://picsum.photos/800/600?random=2".into(),
            link: "".into(),
            category: "AI Tools".into(),
            client: Some("Internal R&D".into()),
            year: Some("2023".into()),
            role: Some("Full Stack Engineer".into()),
            challenge: Some("Making model suggestions feel native to the writing flow instead of interrupting it.".into()),
            solution: Some("Streaming responses merged into the document through an operational-transform layer, so user keystrokes always win.".into()),
        },
        Project {
            id: 3,
            title: "Vantage Commerce".into(),
            description: "Headless storefront for luxury labels with immersive 3D product staging.".into(),
            tags: vec!["Next.js".into(), "Three.js".into(), "Stripe".into()],
            image_url: "https://picsum.photos/800/600?random=3".into(),
            link: "".into(),
            category: "E-Commerce".into(),
            client: Some("Maison Vantage".into()),
            year: Some("2024".into()),
            role: Some("Frontend Lead".into()),
            challenge: Some("High-fidelity 3D assets were unusable on mid-range phones.".into()),
            solution: Some("Compressed geometry with progressive loading tiers, landing a 98 performance score without visible quality loss.".into()),
        },
        Project {
            id: 4,
            title: "Parallax Atlas".into(),
            description: "An isometric blueprint viewer that turns CAD exports into explorable scenes in the browser.".into(),
            tags: vec!["WebGL".into(), "Parsers".into(), "Vue".into()],
            image_url: "https://picsum.photos/800/600?random=4".into(),
            link: "".into(),
            category: "Spatial".into(),
            client: Some("Archline Studio".into()),
            year: Some("2023".into()),
            role: Some("Creative Developer".into()),
            challenge: Some("Translating dense CAD data into browser-friendly structures without losing precision.".into()),
            solution: Some("A custom parser emits optimized scene graphs rendered through an instanced shader pipeline.".into()),
        },
    ]
}

pub fn ventures() -> Vec<Venture> {
    vec![
        Venture {
            id: 1,
            name: "Northbyte".into(),
            role: "Founder & Architect".into(),
            description: "The engineering arm building scalable digital infrastructure.".into(),
            long_description: "Northbyte is the systems backbone of the portfolio: high-frequency data plumbing, resilient cloud architecture and the unglamorous machinery that keeps commerce moving.".into(),
            logo_url: "https://picsum.photos/200/200?random=11".into(),
            cover_url: "https://picsum.photos/800/400?random=11".into(),
            website: "#".into(),
            status: "Active - Scaling".into(),
            stats: vec![
                VentureStat { label: "Systems".into(), value: "Enterprise".into() },
                VentureStat { label: "Uptime".into(), value: "99.99%".into() },
                VentureStat { label: "Focus".into(), value: "Infrastructure".into() },
            ],
            contact: Some(VentureContact {
                email: "hello@northbyte.dev".into(),
                location: "Remote / Distributed".into(),
                handle: "@northbyte".into(),
            }),
        },
        Venture {
            id: 2,
            name: "Lumen Forge".into(),
            role: "Founder & Visionary".into(),
            description: "An incubation lab quietly developing a pipeline of consumer brands.".into(),
            long_description: "Lumen Forge sits where design meets futurism. A stealth pipeline of consumer identities is in development, each built on the same playbook: narrative first, product second, scale third.".into(),
            logo_url: "https://picsum.photos/200/200?random=12".into(),
            cover_url: "https://picsum.photos/800/400?random=12".into(),
            website: "#".into(),
            status: "Innovation Arm".into(),
            stats: vec![
                VentureStat { label: "Pipeline".into(), value: "30+ Brands".into() },
                VentureStat { label: "Status".into(), value: "Stealth/Dev".into() },
                VentureStat { label: "Sector".into(), value: "Design Tech".into() },
            ],
            contact: Some(VentureContact {
                email: "studio@lumenforge.design".into(),
                location: "Global Distributed".into(),
                handle: "@lumenforge".into(),
            }),
        },
        Venture {
            id: 3,
            name: "Sterling Holdings".into(),
            role: "Chairman".into(),
            description: "The governing body and strategic holding company for the ecosystem.".into(),
            long_description: "Sterling Holdings is the central pillar: it manages the venture portfolio, sets strategic direction and keeps every subsidiary aligned with the core vision.".into(),
            logo_url: "https://picsum.photos/200/200?random=13".into(),
            cover_url: "https://picsum.photos/800/400?random=13".into(),
            website: "#".into(),
            status: "Parent Company".into(),
            stats: vec![
                VentureStat { label: "Assets".into(), value: "Diversified".into() },
                VentureStat { label: "Reach".into(), value: "Global".into() },
                VentureStat { label: "Est.".into(), value: "2024".into() },
            ],
            contact: None,
        },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Commercial Brokerage".into(),
            description: "Acting as the intermediary between capital, talent and opportunity; structuring and closing complex commercial deals.".into(),
            icon: "Handshake".into(),
        },
        Service {
            title: "Executive Management".into(),
            description: "Fractional C-suite leadership to structure operations, align teams and point the business at profit.".into(),
            icon: "Briefcase".into(),
        },
        Service {
            title: "Commerce Systems".into(),
            description: "Revenue infrastructure from B2B payment flows to direct-to-consumer growth modelling.".into(),
            icon: "TrendingUp".into(),
        },
        Service {
            title: "Full-Stack Engineering".into(),
            description: "Robust, scalable applications built on a modern systems stack, from storage layer to pixel.".into(),
            icon: "Code".into(),
        },
        Service {
            title: "Brand Strategy".into(),
            description: "Visual and narrative identity work that raises market value and consumer trust.".into(),
            icon: "Palette".into(),
        },
        Service {
            title: "AI Operations".into(),
            description: "Intelligent agents wired into business workflows to cut operational overhead.".into(),
            icon: "Bot".into(),
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sarah Jenkins".into(),
            role: "CEO, Meridian Capital".into(),
            text: "They didn't just build our platform; they managed the entire rollout strategy. A true business partner.".into(),
        },
        Testimonial {
            name: "Marcus Chen".into(),
            role: "Founder, Aether Labs".into(),
            text: "The ability to bridge technical requirements and commercial goals is rare. Sterling has it.".into(),
        },
        Testimonial {
            name: "Elena Rodriguez".into(),
            role: "Director, Luxe Group".into(),
            text: "From negotiation to execution the process was flawless. They operate as an extension of our board.".into(),
        },
    ]
}

pub fn skills() -> Vec<SkillRating> {
    vec![
        SkillRating { subject: "Management".into(), level: 98, full_mark: 100 },
        SkillRating { subject: "Brokerage".into(), level: 95, full_mark: 100 },
        SkillRating { subject: "Commerce".into(), level: 92, full_mark: 100 },
        SkillRating { subject: "Negotiation".into(), level: 90, full_mark: 100 },
        SkillRating { subject: "Strategy".into(), level: 88, full_mark: 100 },
        SkillRating { subject: "Engineering".into(), level: 85, full_mark: 100 },
    ]
}
