//! Built-in navigation data for the ERP portal.

use super::entry::NavigationEntry;

fn entry(
    id: &str,
    title: &str,
    href: &str,
    icon: &str,
    order: i32,
    description: &str,
) -> NavigationEntry {
    NavigationEntry::new(id, title, href, order)
        .with_icon(icon)
        .with_description(description)
}

/// Student portal tabs, in logical sequence
#[rustfmt::skip]
pub fn main_nav() -> Vec<NavigationEntry> {
    vec![
        entry("dashboard", "PROFILE", "/dashboard/", "bi-person-circle", 1, "Student profile and personal information"),
        entry("attendance", "ATTENDANCE", "/attendance/", "bi-calendar-check", 2, "View attendance records and reports"),
        entry("fees", "FEE DETAILS", "/fees/", "bi-credit-card", 3, "Fee structure, payments and receipts"),
        entry("transport-fee", "TRANSPORT FEE", "/transport-fee/", "bi-bus-front", 4, "Transport fee application and payment"),
        entry("examination", "EXAMINATION", "/examination/", "bi-journal-text", 5, "Exam schedules, forms and results"),
        entry("result", "RESULT", "/result/", "bi-trophy", 6, "View exam results and grades"),
        entry("library", "LIBRARY", "/library/", "bi-book", 7, "Library books and resources"),
        entry("registration", "REGISTRATION", "/registration/", "bi-pencil-square", 8, "Semester and course registration"),
        entry("assignment", "ASSIGNMENTS", "/assignment/", "bi-clipboard-check", 9, "Assignment submission and tracking"),
        entry("class", "CLASSES", "/class/", "bi-calendar-week", 10, "Class schedule and attendance tracking"),
        entry("events", "EVENTS", "/events/", "bi-calendar-event", 11, "College events and activities management"),
        entry("calendar", "CALENDAR", "/calendar/", "bi-calendar3", 12, "College academic calendar and important dates"),
        entry("placement", "PLACEMENT", "/placement/", "bi-briefcase", 13, "Job opportunities and placement information"),
        entry("application-center", "APPLICATION CENTER", "/application-center/", "bi-file-earmark-text", 14, "Submit applications for certificates, leave, and other requests"),
    ]
}

/// Landing page menu
#[rustfmt::skip]
pub fn public_nav() -> Vec<NavigationEntry> {
    vec![
        entry("college-info", "College Info", "/college-info/", "bi-building", 1, "About college, courses and facilities"),
        entry("admissions", "Admissions", "#admissions", "bi-mortarboard", 2, "Admission process and requirements"),
        entry("finance", "Fees", "#finance", "bi-currency-dollar", 3, "Fee structure and payment options"),
        entry("hostel", "Hostel", "#hostel", "bi-house", 4, "Hostel facilities and accommodation"),
        entry("analytics", "Dashboard", "#analytics", "bi-graph-up", 5, "College statistics and achievements"),
    ]
}

pub fn admin_nav() -> Vec<NavigationEntry> {
    vec![entry(
        "admin-registration",
        "Student Registration",
        "/admin-student-registration/",
        "bi-person-plus",
        1,
        "Register new students",
    )]
}

#[rustfmt::skip]
pub fn faculty_nav() -> Vec<NavigationEntry> {
    vec![
        entry("faculty-profile", "PROFILE", "/faculty-portal/", "bi-person-badge", 1, "Faculty profile and personal information"),
        entry("faculty-attendance", "ATTENDANCE", "/attendance/", "bi-calendar-check", 2, "Mark and view attendance"),
        entry("faculty-program", "PROGRAM", "/faculty-portal/", "bi-journal-bookmark", 3, "Program/curriculum details"),
        entry("faculty-mentorship", "MENTORSHIP DETAILS", "/faculty-portal/", "bi-people", 4, "Mentorship assignments and notes"),
        entry("faculty-examination", "EXAMINATION", "/examination/", "bi-clipboard-data", 5, "Exam duties, question papers, evaluations"),
        entry("faculty-hr", "HR", "/hr-department/", "bi-person-gear", 6, "Leave, payroll and HR services"),
        entry("faculty-library", "LIBRARY", "/library/", "bi-book", 7, "Library services for faculty"),
        entry("faculty-others", "OTHERS", "/faculty-portal/", "bi-grid", 8, "Miscellaneous tools"),
        entry("faculty-mentor-mentee", "MENTOR-MENTEE", "/faculty-portal/", "bi-person-hearts", 9, "Mentor-mentee interactions"),
    ]
}
