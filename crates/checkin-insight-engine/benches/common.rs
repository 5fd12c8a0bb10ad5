// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_report_text(sections: usize) -> String {
    let base = "### Booking Risk Analysis\n\nThe model flags this booking as **high risk** driven by price__scaled and lead_time__log.\n\nKey Factors:\n- **Cancellation Risk**: High due to late booking\n- **Platform**: Phone bookings carry extra risk\n  - num_adults__log is significant\n\n1. Verify the deposit\n2. Confirm contact details\n\n---\n\n### Recommended Actions\n\n- **Outreach**: Call the guest before arrival\n\n";
    base.repeat(sections)
}
