//! Development status report, February 2026.

use rav_docs::brand;
use rav_docs::{BodyStyle, BrandedDocument, Logo};

use crate::GenerationContext;

pub const FILE_NAME: &str = "RAV-Development-Status-Report-02222026.docx";
pub const DOC_TITLE: &str = "Development Status Report";

pub fn build(ctx: &GenerationContext) -> BrandedDocument {
    let mut doc = BrandedDocument::new(DOC_TITLE);
    masthead(&mut doc, ctx.logo.as_ref());
    executive_summary(&mut doc);
    technology_stack(&mut doc);
    feature_inventory(&mut doc);
    membership_pricing(&mut doc);
    edge_functions(&mut doc);
    email_system(&mut doc);
    recent_development_activity(&mut doc);
    deployment_status(&mut doc);
    next_priorities(&mut doc);
    performance_metrics(&mut doc);
    doc
}

const SUPPORTED_BRANDS: [&str; 9] = [
    "Hilton Grand Vacations (62 resorts in ResortIQ)",
    "Marriott Vacation Club (40 resorts)",
    "Disney Vacation Club (15 resorts)",
    "Wyndham Destinations",
    "Hyatt Residence Club",
    "Bluegreen Vacations",
    "Holiday Inn Club Vacations",
    "WorldMark by Wyndham",
    "Other / Independent Resort",
];

fn masthead(doc: &mut BrandedDocument, logo: Option<&Logo>) {
    doc.logo_header(Some(DOC_TITLE), logo)
        .page_numbers()
        .metadata(&[
            ("Date", "February 22, 2026"),
            ("Prepared by", "Sujit (RAV Owner / Lead Developer)"),
            ("Version", "v0.9.0"),
            ("Platform Status", "Pre-Launch (Staff Only Mode — deployed to production, locked for internal testing)"),
            ("Last Updated", "February 22, 2026 at 11:30 PM EST"),
        ])
        .spacer();
}

fn executive_summary(doc: &mut BrandedDocument) {
    doc.heading(1, "1. Executive Summary")
        .body("Rent-A-Vacation (RAV) is a peer-to-peer vacation rental marketplace for timeshare and vacation club owners. The platform is feature-complete for MVP with 19 completed development phases, covering the full owner-to-traveler lifecycle: property registration, listing management, AI-powered search, bidding/negotiation, Stripe payments, escrow, owner confirmation, check-in verification, and payout processing.")
        .body("All code is deployed to production and currently locked behind \"Staff Only Mode\" for pre-launch testing and seed data validation.")
        .spacer()
        .body_styled(
            "Platform Health Dashboard",
            BodyStyle {
                bold: true,
                size_pt: 12.0,
                color: brand::DEEP_TEAL,
                ..BodyStyle::default()
            },
        )
        .table(
            &["Metric", "Value", "Status"],
            &[
                ["Automated Tests", "306 (all passing)", "✅"],
                ["TypeScript Errors", "0", "✅"],
                ["ESLint Errors", "0", "✅"],
                ["Production Build", "Clean", "✅"],
                ["Database Migrations", "21 (deployed to DEV + PROD)", "✅"],
                ["Edge Functions", "17 (deployed to PROD)", "✅"],
                ["Completed Phases", "19 + supplementary tracks", "✅"],
            ],
        );
}

fn technology_stack(doc: &mut BrandedDocument) {
    doc.heading(1, "2. Technology Stack")
        .table(
            &["Layer", "Technology", "Purpose"],
            &[
                ["Frontend", "React 18 + TypeScript + Vite + SWC", "Single-page application with strict typing"],
                ["Styling", "Tailwind CSS + shadcn/ui (Radix primitives)", "Utility-first CSS with accessible component library"],
                ["Routing", "React Router v6", "Client-side routing with protected routes"],
                ["Data Fetching", "TanStack React Query v5", "Server state management, caching, optimistic updates"],
                ["Forms", "React Hook Form + Zod", "Schema-validated forms"],
                ["Auth", "Supabase Auth", "Email/password, Google OAuth, admin-approved signups"],
                ["Database", "Supabase PostgreSQL", "Row Level Security (RLS), pg_cron, pg_net"],
                ["Backend", "Supabase Edge Functions (Deno)", "17 serverless functions"],
                ["Payments", "Stripe Checkout", "Payment capture, escrow hold, webhooks"],
                ["Email", "Resend API", "Branded transactional emails from notifications@updates.rent-a-vacation.com"],
                ["Voice AI", "VAPI + Deepgram Nova-3", "Voice transcription and natural language property search"],
                ["Text AI", "OpenRouter (Gemini 3 Flash)", "LLM chat with SSE streaming and tool calling"],
                ["Charts", "Recharts", "Dashboard analytics and data visualization"],
                ["Hosting", "Vercel (frontend) + Supabase (backend)", "Auto-deploy from GitHub on merge to main"],
                ["CI/CD", "GitHub Actions", "5-job pipeline: lint, typecheck, unit tests, E2E, Percy visual regression"],
                ["PWA", "vite-plugin-pwa + Workbox", "Service worker (59 precached entries), install prompt, offline detection"],
            ],
        );
}

fn feature_inventory(doc: &mut BrandedDocument) {
    doc.heading(1, "3. Feature Inventory")
        .heading(2, "3.1 Core Marketplace Features")
        .table(
            &["Feature", "Description", "Database Tables"],
            &[
                ["User Registration", "Email/password + Google OAuth with admin approval workflow", "profiles, user_roles"],
                ["Role-Based Access (RBAC)", "5 roles: RAV Owner, RAV Admin, RAV Staff, Property Owner, Renter", "user_roles (enum: app_role)"],
                ["Property Registration", "Multi-step form with resort search (117 resorts), auto-populate specs, image upload", "properties, property-images bucket"],
                ["Listing Management", "Draft → Pending Approval → Active lifecycle, per-night pricing, 4 cancellation policies", "listings (nightly_rate, owner_price, rav_markup, final_price)"],
                ["Booking Flow", "Browse → View → Book Now → Stripe Checkout → Payment → Confirmation", "bookings, booking_confirmations"],
                ["Escrow (PaySafe)", "Funds held until check-in confirmed. Released to owner after checkout + 5 days", "booking_confirmations (escrow_status)"],
                ["Owner Confirmation Timer", "Configurable countdown (default 60 min), up to 2 × 30-min extensions, auto-cancel", "booking_confirmations"],
                ["Check-in Verification", "Traveler confirms arrival or reports issues (access, safety, mismatch)", "checkin_confirmations"],
                ["Cancellation System", "4 policies: Flexible, Moderate, Strict, Super Strict. Refund calculation engine", "cancellation_requests"],
                ["Owner Verification (TrustShield)", "Document upload, 4 trust levels, admin review workflow", "owner_verifications, verification_documents"],
            ],
        )
        .heading(2, "3.2 AI-Powered Search")
        .table(
            &["Feature", "Name", "Technology", "Key Details"],
            &[
                ["Voice Search", "Ask RAVIO", "VAPI + Deepgram Nova-3", "Natural language queries, 300ms endpointing, smart denoising, LiveKit smart endpointing, keyword boosts. Shared property-search.ts module with state name expansion"],
                ["Text Chat", "Chat with RAVIO", "OpenRouter (Gemini 3 Flash)", "SSE streaming, tool calling (search_properties), 4 context-aware system prompts (rentals, property-detail, bidding, general). JWT auth, 60 req/min rate limit"],
                ["Resort Database", "ResortIQ", "PostgreSQL", "117 resorts (Hilton 62, Marriott 40, Disney 15), 351 unit types, 10+ countries. Auto-populate bedrooms, bathrooms, max guests, square footage"],
            ],
        )
        .heading(2, "3.3 Bidding & Negotiation")
        .table(
            &["Feature", "Name", "Description"],
            &[
                ["Standard Bids", "Name Your Price", "Travelers bid on listings where owner opted in. Owner reviews → accept/reject/counter"],
                ["Date Proposals", "—", "Bid with different dates; amount auto-computes from nightly_rate × proposed nights. Blue badge in owner's bid manager"],
                ["Travel Requests", "Vacation Wishes", "Reverse auction: travelers post destination + dates + budget, owners respond with proposals. Auto-matching on listing approval"],
                ["Inspired Requests", "—", "\"Request Similar Dates\" button on PropertyDetail pre-fills travel request. Optional owner targeting"],
                ["Demand Signals", "—", "Owners see matching travel request count + max budget while creating listings (500ms debounce)"],
                ["Auto-Matching", "—", "match-travel-requests edge function runs on listing approval, matches by destination, dates (±30 days), bedrooms, budget, brand"],
            ],
        )
        .heading(2, "3.4 Business Intelligence")
        .table(
            &["Dashboard", "Name", "Audience", "Sections"],
            &[
                ["Executive", "RAV Command", "RAV Owner", "(1) Headline KPI bar, (2) Business Performance (4 charts), (3) Marketplace Health (Liquidity Score gauge, supply/demand map, voice funnel), (4) Market Intelligence (AirDNA + STR via BYOK), (5) Industry Feed, (6) Unit Economics"],
                ["Owner", "Owner's Edge", "Property Owners", "(1) Headline Stats, (2) Earnings Timeline (AreaChart + fee target), (3) My Listings Table (status/Fair Value badges), (4) Bid Activity Feed, (5) Pricing Intelligence, (6) Maintenance Fee Tracker"],
                ["Fair Value", "RAV SmartPrice", "All users", "P25-P75 percentile analysis. Tiers: below_market, fair_value, above_market. Role-specific messaging"],
                ["Calculator", "Fee Freedom Calculator", "Public", "Break-even analysis for 9 brands, 4 unit types. Progress bars + CTA"],
            ],
        )
        .heading(2, "3.5 Admin & Operations")
        .table(
            &["Capability", "Details"],
            &[
                ["Admin Dashboard", "12 tabs: Overview, Users, Listings, Bookings, Properties, Verifications, Escrow, Payouts, Financials, Issues, Voice, Memberships"],
                ["Voice Admin", "5 sections: Config info, Tier quota manager, Per-user overrides, Usage dashboard (charts + top users), Observability (log viewer + alert thresholds)"],
                ["Staff Only Mode", "Pre-launch lock with 3-layer enforcement: (1) Database RLS, (2) Login signs out non-RAV users, (3) Signup shows \"Coming Soon\". Toggle in Admin > System Settings"],
                ["Seed Data System", "DEV-only 3-layer system with production guard. Layer 1: 8 foundation users. Layer 2: 10 properties, 30 listings. Layer 3: 50 renters, 110 bookings, 20 bids. Password: SeedTest2026!"],
            ],
        );
}

fn membership_pricing(doc: &mut BrandedDocument) {
    doc.heading(1, "4. Membership & Pricing")
        .heading(2, "4.1 Membership Tiers (6 total)")
        .body_styled("Renter Tiers:", BodyStyle::bold())
        .table(
            &["Tier", "Monthly Price", "Voice Searches/Day", "Benefits"],
            &[
                ["Free", "$0", "5", "Browse listings, place bids, post travel requests"],
                ["Plus", "$9.99", "25", "Priority support, saved searches"],
                ["Premium", "$24.99", "Unlimited", "Early access, concierge service"],
            ],
        )
        .spacer()
        .body_styled("Owner Tiers:", BodyStyle::bold())
        .table(
            &["Tier", "Monthly Price", "Commission Rate", "Benefits"],
            &[
                ["Free", "$0", "15% (default)", "List properties, basic dashboard, bid management"],
                ["Pro", "$19.99", "13% (−2%)", "Analytics, priority listing placement"],
                ["Business", "$49.99", "10% (−5%)", "Multi-property management, API access, dedicated support"],
            ],
        )
        .blockquote("Source: Migration 011 (membership_tiers table). The base commission rate (currently 15%) is admin-configurable in Admin > System Settings (platform_commission_rate). Stripe processing fees (~2.9%) are absorbed by RAV within the service fee margin.")
        .heading(2, "4.2 Supported Vacation Club Brands (9)");
    for (i, brand) in SUPPORTED_BRANDS.iter().enumerate() {
        doc.body(format!("{}. {brand}", i + 1));
    }
    doc.blockquote("Source: VACATION_CLUB_BRANDS in calculatorLogic.ts and vacation_club_brand database enum.");
}

fn edge_functions(doc: &mut BrandedDocument) {
    doc.heading(1, "5. Edge Functions (17 total)")
        .table(
            &["#", "Function", "Trigger", "Purpose"],
            &[
                ["1", "create-booking-checkout", "Client call", "Creates Stripe Checkout session with tier-aware commission"],
                ["2", "verify-booking-payment", "Stripe webhook", "Validates payment, creates booking + confirmation with acceptance timer, sends emails"],
                ["3", "send-email", "Client call", "Generic transactional email via Resend API"],
                ["4", "send-approval-email", "Client call", "Approval/rejection notifications (4 template variants)"],
                ["5", "send-booking-confirmation-reminder", "Client/internal", "Owner deadline reminders + acceptance notifications"],
                ["6", "send-cancellation-email", "Internal", "Cancellation status notifications (4 variants)"],
                ["7", "send-contact-form", "Client call", "Contact form submission with confirmation"],
                ["8", "send-verification-notification", "Client call", "Admin notification on doc upload"],
                ["9", "process-deadline-reminders", "CRON (30 min)", "Scan deadlines, reminders, timeouts, travel request expiry warnings"],
                ["10", "match-travel-requests", "Internal (admin)", "Auto-match listings to travel requests (budget-aware, deduped)"],
                ["11", "voice-search", "VAPI webhook", "Property search via voice, shared search module"],
                ["12", "text-chat", "Client call", "OpenRouter LLM, SSE streaming, tool calling, 4 modes"],
                ["13", "seed-manager", "Client call", "DEV-only 3-layer seed data (production-guarded)"],
                ["14", "fetch-industry-news", "Client call", "NewsAPI + Google News RSS (60-min cache)"],
                ["15", "fetch-macro-indicators", "Client call", "FRED consumer confidence + travel data"],
                ["16", "fetch-airdna-data", "Client call", "AirDNA market comparisons (BYOK)"],
                ["17", "fetch-str-data", "Client call", "STR hospitality benchmarks (BYOK)"],
            ],
        )
        .heading(2, "Required Secrets (Supabase Dashboard)")
        .table(
            &["Secret", "Used by", "Environments"],
            &[
                ["RESEND_API_KEY", "All email functions", "DEV + PROD"],
                ["STRIPE_SECRET_KEY", "create-booking-checkout, verify-booking-payment", "DEV + PROD"],
                ["NEWSAPI_KEY", "fetch-industry-news", "DEV + PROD"],
                ["OPENROUTER_API_KEY", "text-chat", "DEV + PROD"],
                ["IS_DEV_ENVIRONMENT", "seed-manager (production guard)", "DEV only"],
            ],
        );
}

fn email_system(doc: &mut BrandedDocument) {
    doc.heading(1, "6. Email System")
        .body_styled("17 transactional email types via Resend API, using branded HTML templates from _shared/email-template.ts.", BodyStyle::bold())
        .table(
            &["Category", "Email", "Trigger", "Recipient"],
            &[
                ["Account", "Welcome", "User signup", "New user"],
                ["", "User Approved", "Admin approves", "User"],
                ["", "User Rejected", "Admin rejects", "User"],
                ["Listings", "Listing Approved", "Admin approves", "Owner"],
                ["", "Listing Rejected", "Admin rejects", "Owner"],
                ["", "Listing Submitted", "Owner submits", "RAV admin"],
                ["Bookings", "Booking Confirmed", "Payment verified", "Traveler"],
                ["", "Check-in Reminder", "CRON, near arrival", "Traveler"],
                ["Owner Confirm.", "Confirmation Request", "Payment verified", "Owner"],
                ["", "Extension Notification", "Owner requests extension", "Renter"],
                ["", "Confirmation Timeout", "Owner times out", "Owner + Renter"],
                ["Cancellation", "Submitted", "Request created", "Traveler"],
                ["", "Approved", "Owner approves", "Traveler"],
                ["", "Denied", "Owner denies", "Traveler"],
                ["", "Counter-Offer", "Owner counter-offers", "Traveler"],
                ["Verification", "Document Uploaded", "Doc upload", "RAV admin"],
                ["Support", "Contact Form", "Form submission", "support@"],
            ],
        );
}

fn recent_development_activity(doc: &mut BrandedDocument) {
    doc.heading(1, "7. Recent Development Activity (Sessions 14–16)")
        .heading(2, "Session 14: Phase 19 — Flexible Date Booking + Per-Night Pricing (Feb 22)")
        .bullets(&[
            "Migration 020: Added nightly_rate column to listings (backfilled from owner_price / nights), requested_check_in/out on listing_bids, source_listing_id + target_owner_only on travel_requests",
            "Shared pricing utility: src/lib/pricing.ts — calculateNights() + computeListingPricing() replacing 4 duplicated functions",
            "BidFormDialog dual-mode: Standard bid vs date-proposal with auto-computed amounts",
            "InspiredTravelRequestDialog: \"Request Similar Dates\" from listing detail, pre-fills form, optional owner targeting",
            "Owner listing form: Switched from lump-sum \"Your Asking Price\" to \"Nightly Rate\" with live price breakdown",
            "16 new tests (289 total). PR #20 merged, migration deployed to DEV + PROD",
        ])
        .heading(2, "Session 15: Content Accuracy Audit (Feb 22)")
        .bullets(&[
            "Fixed commission rate (10% → 15%) across 7 code files + 3 test files",
            "Corrected brand list (Westgate → WorldMark, 8 → 9 brands)",
            "Fixed voice quota display (flat 10/day → tier-based from database)",
            "Added 9 missing sections to Documentation.tsx admin manual",
            "Established Content Accuracy (MANDATORY) policy in CLAUDE.md",
        ])
        .heading(2, "Session 16: Voice Tracks C-D — Admin Controls + Observability (Feb 22)")
        .bullets(&[
            "Migration 021: voice_search_logs table, voice_user_overrides table, 3 RPCs, 2 alert threshold settings",
            "Admin Dashboard \"Voice\" tab: 5 sections — config info, tier quota manager, per-user overrides, usage dashboard, observability",
            "Auto-logging: All voice searches automatically logged with query, results count, duration, success status",
            "17 new tests (306 total)",
        ]);
}

fn deployment_status(doc: &mut BrandedDocument) {
    doc.heading(1, "8. Deployment Status")
        .table(
            &["Environment", "Status", "URL", "Database"],
            &[
                ["Production", "Staff Only Mode (locked)", "rent-a-vacation.com", "Supabase PROD"],
                ["Staging/Preview", "Active development", "Vercel preview URLs", "Supabase DEV"],
            ],
        )
        .spacer()
        .table(
            &["Resource", "Count", "Deployment"],
            &[
                ["Database Migrations", "21", "Both DEV + PROD"],
                ["Edge Functions", "17", "PROD (seed-manager DEV-only)"],
                ["Automated Tests", "306", "All passing"],
                ["GitHub PRs Merged", "#12–#21", "All to main"],
            ],
        );
}

fn next_priorities(doc: &mut BrandedDocument) {
    doc.heading(1, "9. Next Priorities")
        .table(
            &["Priority", "Phase", "Description", "Timeline"],
            &[
                ["1", "Phase 20A-C", "Accounting, Tax & Fee Framework (fee breakdown, Stripe Tax, reporting)", "Pre-launch"],
                ["2", "Phase 3", "Voice Everywhere (voice-assisted listing, booking, bidding)", "Q2 2026"],
                ["3", "Phase 12", "Native App Shells via Capacitor (Android + iOS)", "Q2-Q3 2026"],
                ["4", "Phase 20D-F", "QuickBooks integration, 1099-K compliance, automated tax filing", "Post-launch"],
                ["5", "Phase 21", "Partial-Week Booking (listing splits, minimum stay)", "When demand validates"],
                ["6", "Phase 6", "Advanced Features (saved searches, map view, calendar integration)", "Q3 2026"],
            ],
        );
}

fn performance_metrics(doc: &mut BrandedDocument) {
    doc.heading(1, "10. Performance Metrics")
        .table(
            &["Metric", "Value", "Label"],
            &[
                ["Resort Coverage", "117 resorts, 351 unit types, 10+ countries", "BUILT"],
                ["Automated Test Count", "306", "BUILT"],
                ["Voice Search Adoption", "34% of all searches", "PROJECTED"],
                ["Voice Search Success Rate", "87%", "PROJECTED"],
                ["Voice NPS", "+68", "PROJECTED"],
                ["Listing Completion Time", "8 min (was 22 min, −64%)", "PROJECTED"],
                ["Listing Completion Rate", "94% (was 67%, +27%)", "PROJECTED"],
                ["Owner Satisfaction", "4.7 stars (was 3.8, +0.9)", "PROJECTED"],
            ],
        )
        .blockquote("Honesty Framework: BUILT = deployed and demonstrable in the codebase. INDUSTRY DATA = published research from third-party sources. PROJECTED = forward-looking estimates based on industry benchmarks and internal modeling.")
        .footer("Generated February 22, 2026. All statistics verified against source code and database schema.\nRent-A-Vacation | rent-a-vacation.com | Name Your Price. Book Your Paradise.");
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn doc() -> BrandedDocument {
        build(&GenerationContext::new(
            NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(),
        ))
    }

    #[test]
    fn test_ten_numbered_sections() {
        let outline = doc().outline();
        let top: Vec<&str> = outline
            .headings
            .iter()
            .filter(|h| h.level == 1)
            .map(|h| h.text.as_str())
            .collect();
        assert_eq!(top.len(), 10);
        assert_eq!(top[0], "1. Executive Summary");
        assert_eq!(top[9], "10. Performance Metrics");
    }

    #[test]
    fn test_stack_table_shape() {
        let outline = doc().outline();
        let table = outline.table_under("2. Technology Stack").unwrap();
        assert_eq!(table.columns, 3);
        assert_eq!(table.rows, 16);
    }

    #[test]
    fn test_brands_are_numbered() {
        let markdown = rav_docs::markdown::render_markdown(&doc());
        assert!(markdown.contains("1. Hilton Grand Vacations (62 resorts in ResortIQ)"));
        assert!(markdown.contains("9. Other / Independent Resort"));
    }
}
