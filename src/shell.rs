use crate::api;
use crate::error::ApiError;
use crate::guard::NavOutcome;
use crate::models::{
    AttendanceRecord, Enrolment, Grade, LoginContext, Module, NewAlert, NewAttendanceRecord,
    NewEnrolment, NewGrade, NewModule, NewStudent, NewSurveyResponse, NewUser,
    RegisterStudentRequest, Student, SubmissionRecord, SurveyResponse, UserAccount, TrendData,
    WellbeingAlert,
};
use crate::routes;
use crate::session::Role;
use crate::AppContext;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Shell
///
/// The interactive surface: one command per line on stdin, dispatched against
/// the current screen. Navigation always goes through the guard; the prompt
/// shows where the guard actually put us, which is how denied navigations
/// become visible. API errors are printed once and never retried.
pub struct Shell {
    ctx: AppContext,
    // Target for the student-detail screen, set by `go student-detail <id>`.
    detail_id: Option<i64>,
}

impl Shell {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            detail_id: None,
        }
    }

    /// run
    ///
    /// The main loop. Reads until EOF or `quit`; blank lines are skipped, a
    /// broken stdin ends the session the same way EOF does.
    pub async fn run(&mut self) {
        println!("student wellbeing console - type 'help' for commands");
        self.show_screen().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.prompt();
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) | Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.dispatch(line).await {
                break;
            }
        }
        println!("goodbye");
    }

    // The prompt names the current screen, so every guard redirect is visible
    // even when the user types nothing else.
    fn prompt(&self) {
        print!("{}> ", self.ctx.navigator.current());
        let _ = std::io::stdout().flush();
    }

    /// dispatch
    ///
    /// One command in, true to keep looping. Unknown commands never error out
    /// of the loop.
    async fn dispatch(&mut self, line: &str) -> bool {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (command, args) = (parts[0], &parts[1..]);

        match command {
            "help" => print_help(),
            "quit" | "exit" => return false,

            // --- Session commands ---
            "login" => self.sign_in(args, LoginContext::Staff).await,
            "login-student" => self.sign_in(args, LoginContext::Student).await,
            "register" => self.register(args).await,
            "register-student" => self.register_student(args).await,
            "logout" => self.sign_out().await,
            "whoami" => self.whoami(),

            // --- Navigation commands ---
            "go" => self.go(args).await,
            "routes" => print_routes(),
            "refresh" => self.show_screen().await,

            // --- Screen actions ---
            "add-student" => self.add_student(args).await,
            "delete-student" => self.delete_by_id(args, "student").await,
            "add-module" => self.add_module(args).await,
            "delete-module" => self.delete_by_id(args, "module").await,
            "enrol" => self.enrol(args).await,
            "delete-enrolment" => self.delete_by_id(args, "enrolment").await,
            "add-grade" => self.add_grade(args).await,
            "delete-grade" => self.delete_by_id(args, "grade").await,
            "add-attendance" => self.add_attendance(args).await,
            "delete-attendance" => self.delete_by_id(args, "attendance").await,
            "add-alert" => self.add_alert(args).await,
            "resolve" => self.resolve_alert(args).await,
            "delete-alert" => self.delete_by_id(args, "alert").await,
            "alerts-for" => self.alerts_for(args).await,
            "add-user" => self.add_user(args).await,
            "delete-user" => self.delete_by_id(args, "user").await,
            "reset-password" => self.reset_password(args).await,
            "submit-survey" => self.submit_survey(args).await,
            "delete-submission" => self.delete_by_id(args, "submission").await,
            "delete-survey-response" => self.delete_by_id(args, "survey-response").await,

            other => println!("unknown command: {other} (try 'help')"),
        }
        true
    }

    // --- Session commands ---

    async fn sign_in(&self, args: &[&str], context: LoginContext) {
        let [username, password] = args else {
            match context {
                LoginContext::Staff => println!("usage: login <username> <password>"),
                LoginContext::Student => println!("usage: login-student <username> <password>"),
            }
            return;
        };
        match api::auth::login(&self.ctx.api, username, password, context).await {
            Ok(response) => {
                // Token first, then role: the order snapshots observe.
                self.ctx
                    .session
                    .establish(&response.access_token, &response.user_role)
                    .await;
                println!("{}", response.message);
                let landing = routes::landing_for(&self.ctx.session.snapshot());
                self.ctx.navigator.navigate(landing).await;
                self.show_screen().await;
            }
            Err(e) => print_error(&e),
        }
    }

    async fn register(&self, args: &[&str]) {
        let [username, password] = args else {
            println!("usage: register <username> <password>");
            return;
        };
        match api::auth::register(&self.ctx.api, username, password).await {
            Ok(ack) => println!("{}", ack.message),
            Err(e) => print_error(&e),
        }
    }

    async fn register_student(&self, args: &[&str]) {
        let [student_number, email, password, name @ ..] = args else {
            println!("usage: register-student <student-number> <email> <password> <full name...>");
            return;
        };
        if name.is_empty() {
            println!("usage: register-student <student-number> <email> <password> <full name...>");
            return;
        }
        let request = RegisterStudentRequest {
            student_number: student_number.to_string(),
            full_name: name.join(" "),
            email: email.to_string(),
            password: password.to_string(),
        };
        match api::auth::register_student(&self.ctx.api, &request).await {
            Ok(ack) => println!("{}", ack.message),
            Err(e) => print_error(&e),
        }
    }

    async fn sign_out(&self) {
        self.ctx.session.clear().await;
        self.ctx.navigator.navigate(routes::ENTRY_ROUTE).await;
        println!("signed out");
    }

    fn whoami(&self) {
        let session = self.ctx.session.snapshot();
        if !session.is_authenticated() {
            println!("signed out");
            return;
        }
        match session.role {
            Some(role) => println!("signed in, role: {role}"),
            None => println!("signed in, role unknown"),
        }
    }

    // --- Navigation commands ---

    async fn go(&mut self, args: &[&str]) {
        let Some(name) = args.first() else {
            println!("usage: go <route> [id]");
            return;
        };
        if *name == "student-detail" {
            match args.get(1) {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(id) => self.detail_id = Some(id),
                    Err(_) => {
                        println!("not a student id: {raw}");
                        return;
                    }
                },
                // Keep whatever detail target was selected last.
                None => {}
            }
        }
        match self.ctx.navigator.navigate(name).await {
            NavOutcome::Moved { .. } => self.show_screen().await,
            NavOutcome::Redirected { requested, to } => {
                println!("{requested} is not available here; moved to {to}");
                self.show_screen().await;
            }
            NavOutcome::UnknownRoute { requested } => {
                println!("unknown route: {requested} (try 'routes')");
            }
        }
    }

    // --- Screen mounting ---

    /// show_screen
    ///
    /// Performs the current screen's read fetch and renders the rows. Screens
    /// with no fetch (the sign-in and survey forms) print their usage hint.
    async fn show_screen(&self) {
        let api = &self.ctx.api;
        match self.ctx.navigator.current() {
            "staff-login" | "student-login" => {
                println!("signed out. sign in with: login <username> <password>");
                println!("students use: login-student <username> <password>");
            }
            "staff-register" => println!("register a staff account: register <username> <password>"),
            "student-register" => {
                println!(
                    "register a student account: register-student <student-number> <email> <password> <full name...>"
                );
            }
            "my-profile" => match api::student::my_profile(api).await {
                Ok(student) => render_profile(&student),
                Err(e) => print_error(&e),
            },
            "dashboard" => match api::analysis::dashboard_summary(api).await {
                Ok(summary) => {
                    println!(
                        "students: {}   modules: {}   pending alerts: {}   users: {}",
                        summary.total_students,
                        summary.total_modules,
                        summary.pending_alerts_count,
                        summary.total_users
                    );
                }
                Err(e) => print_error(&e),
            },
            "students" => match api::admin::list_students(api).await {
                Ok(rows) => render_students(&rows),
                Err(e) => print_error(&e),
            },
            "student-detail" => match self.detail_id {
                Some(id) => self.show_student_detail(id).await,
                None => println!("no student selected; use: go student-detail <id>"),
            },
            "modules" => match api::admin::list_modules(api).await {
                Ok(rows) => render_modules(&rows),
                Err(e) => print_error(&e),
            },
            "alerts" => match api::admin::list_alerts(api).await {
                Ok(rows) => render_alerts(&rows),
                Err(e) => print_error(&e),
            },
            "survey-responses" => match api::admin::list_survey_responses(api).await {
                Ok(rows) => render_survey_responses(&rows),
                Err(e) => print_error(&e),
            },
            "users" => match api::admin::list_users(api).await {
                Ok(rows) => render_users(&rows),
                Err(e) => print_error(&e),
            },
            "survey" => {
                println!("weekly wellbeing survey");
                println!("submit with: submit-survey <stress 1-5> <hours-slept> [comment...]");
            }
            "enrolments" => match api::admin::list_enrolments(api).await {
                Ok(rows) => render_enrolments(&rows),
                Err(e) => print_error(&e),
            },
            "attendance" => match api::admin::list_attendance_records(api).await {
                Ok(rows) => render_attendance(&rows),
                Err(e) => print_error(&e),
            },
            "submissions" => match api::admin::list_submission_records(api).await {
                Ok(rows) => render_submissions(&rows),
                Err(e) => print_error(&e),
            },
            "grades" => match api::admin::list_grades(api).await {
                Ok(rows) => render_grades(&rows),
                Err(e) => print_error(&e),
            },
            "analytics" => self.show_analytics().await,
            _ => {}
        }
    }

    async fn show_student_detail(&self, id: i64) {
        match api::analysis::student_detail(&self.ctx.api, id).await {
            Ok(student) => render_profile(&student),
            Err(e) => {
                print_error(&e);
                return;
            }
        }
        match api::analysis::stress_trend(&self.ctx.api, id).await {
            Ok(trend) => render_trend("stress", &trend),
            Err(e) => print_error(&e),
        }
        match api::analysis::attendance_trend(&self.ctx.api, id).await {
            Ok(trend) => render_trend("attendance %", &trend),
            Err(e) => print_error(&e),
        }
    }

    async fn show_analytics(&self) {
        match api::analysis::grade_distribution(&self.ctx.api).await {
            Ok(distribution) => {
                println!("grade distribution");
                for (label, count) in distribution.labels.iter().zip(&distribution.data) {
                    println!("  {label:<24} {count}");
                }
            }
            Err(e) => print_error(&e),
        }
        match api::analysis::stress_grade_correlation(&self.ctx.api).await {
            Ok(correlation) => {
                println!("stress / grade correlation");
                for point in &correlation.data {
                    println!(
                        "  {:<24} stress {:<6} grade {}",
                        point.name,
                        fmt_opt_f64(point.x),
                        fmt_opt_f64(point.y)
                    );
                }
            }
            Err(e) => print_error(&e),
        }
    }

    // --- Screen actions ---

    async fn add_student(&self, args: &[&str]) {
        let [student_number, email, name @ ..] = args else {
            println!("usage: add-student <student-number> <email> <full name...>");
            return;
        };
        if name.is_empty() {
            println!("usage: add-student <student-number> <email> <full name...>");
            return;
        }
        let student = NewStudent {
            student_number: student_number.to_string(),
            full_name: name.join(" "),
            email: email.to_string(),
            course_name: None,
            year_of_study: None,
        };
        match api::admin::create_student(&self.ctx.api, &student).await {
            Ok(id) => println!("created student {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn add_module(&self, args: &[&str]) {
        let [code, credit, academic_year, title @ ..] = args else {
            println!("usage: add-module <code> <credit> <academic-year> <title...>");
            return;
        };
        let Some(credit) = parse_i32(credit, "credit value") else {
            return;
        };
        if title.is_empty() {
            println!("usage: add-module <code> <credit> <academic-year> <title...>");
            return;
        }
        let module = NewModule {
            module_code: code.to_string(),
            module_title: title.join(" "),
            credit,
            academic_year: academic_year.to_string(),
        };
        match api::admin::create_module(&self.ctx.api, &module).await {
            Ok(id) => println!("created module {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn enrol(&self, args: &[&str]) {
        let [student_id, module_id] = args else {
            println!("usage: enrol <student-id> <module-id>");
            return;
        };
        let (Some(student_id), Some(module_id)) = (
            parse_i64(student_id, "student id"),
            parse_i64(module_id, "module id"),
        ) else {
            return;
        };
        let enrolment = NewEnrolment {
            student_id,
            module_id,
            enrol_date: None,
        };
        match api::admin::create_enrolment(&self.ctx.api, &enrolment).await {
            Ok(id) => println!("created enrolment {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn add_grade(&self, args: &[&str]) {
        let [student_id, module_id, grade, assessment @ ..] = args else {
            println!("usage: add-grade <student-id> <module-id> <grade> <assessment...>");
            return;
        };
        let (Some(student_id), Some(module_id), Some(grade)) = (
            parse_i64(student_id, "student id"),
            parse_i64(module_id, "module id"),
            parse_f64(grade, "grade"),
        ) else {
            return;
        };
        if assessment.is_empty() {
            println!("usage: add-grade <student-id> <module-id> <grade> <assessment...>");
            return;
        }
        let grade = NewGrade {
            student_id,
            module_id,
            assessment_name: assessment.join(" "),
            grade,
        };
        match api::admin::create_grade(&self.ctx.api, &grade).await {
            Ok(id) => println!("created grade {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn add_attendance(&self, args: &[&str]) {
        let [student_id, module_id, week, attended, total] = args else {
            println!("usage: add-attendance <student-id> <module-id> <week> <attended> <total>");
            return;
        };
        let (Some(student_id), Some(module_id)) = (
            parse_i64(student_id, "student id"),
            parse_i64(module_id, "module id"),
        ) else {
            return;
        };
        let (Some(week_number), Some(attended_sessions), Some(total_sessions)) = (
            parse_i32(week, "week number"),
            parse_i32(attended, "attended sessions"),
            parse_i32(total, "total sessions"),
        ) else {
            return;
        };
        let record = NewAttendanceRecord {
            student_id,
            module_id,
            week_number,
            attended_sessions,
            total_sessions,
        };
        match api::admin::create_attendance_record(&self.ctx.api, &record).await {
            Ok(id) => println!("created attendance record {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn add_alert(&self, args: &[&str]) {
        let [student_id, module_id, week, reason @ ..] = args else {
            println!("usage: add-alert <student-id> <module-id> <week> <reason...>");
            return;
        };
        let (Some(student_id), Some(module_id), Some(week_number)) = (
            parse_i64(student_id, "student id"),
            parse_i64(module_id, "module id"),
            parse_i32(week, "week number"),
        ) else {
            return;
        };
        if reason.is_empty() {
            println!("usage: add-alert <student-id> <module-id> <week> <reason...>");
            return;
        }
        let alert = NewAlert {
            student_id,
            module_id,
            week_number,
            reason: reason.join(" "),
        };
        match api::admin::create_alert(&self.ctx.api, &alert).await {
            Ok(id) => println!("created alert {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn resolve_alert(&self, args: &[&str]) {
        let [id] = args else {
            println!("usage: resolve <alert-id>");
            return;
        };
        let Some(id) = parse_i64(id, "alert id") else {
            return;
        };
        match api::admin::resolve_alert(&self.ctx.api, id).await {
            Ok(()) => println!("alert {id} resolved"),
            Err(e) => print_error(&e),
        }
    }

    async fn alerts_for(&self, args: &[&str]) {
        let [student_id] = args else {
            println!("usage: alerts-for <student-id>");
            return;
        };
        let Some(student_id) = parse_i64(student_id, "student id") else {
            return;
        };
        match api::admin::alerts_for_student(&self.ctx.api, student_id).await {
            Ok(rows) => render_alerts(&rows),
            Err(e) => print_error(&e),
        }
    }

    async fn add_user(&self, args: &[&str]) {
        let [username, password, role] = args else {
            println!("usage: add-user <username> <password> <role>");
            return;
        };
        let Some(role) = Role::parse(role) else {
            println!("unknown role: {role} (admin, course_director, wellbeing_officer, student, user)");
            return;
        };
        let user = NewUser {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        match api::admin::create_user(&self.ctx.api, &user).await {
            Ok(id) => println!("created user {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn reset_password(&self, args: &[&str]) {
        let [id, new_password] = args else {
            println!("usage: reset-password <user-id> <new-password>");
            return;
        };
        let Some(id) = parse_i64(id, "user id") else {
            return;
        };
        match api::admin::reset_user_password(&self.ctx.api, id, new_password).await {
            Ok(()) => println!("password reset for user {id}"),
            Err(e) => print_error(&e),
        }
    }

    async fn submit_survey(&self, args: &[&str]) {
        let [stress, hours, comment @ ..] = args else {
            println!("usage: submit-survey <stress 1-5> <hours-slept> [comment...]");
            return;
        };
        let (Some(stress_level), Some(hours_slept)) = (
            parse_i32(stress, "stress level"),
            parse_f64(hours, "hours slept"),
        ) else {
            return;
        };
        let response = NewSurveyResponse {
            student_id: None,
            module_id: None,
            week_number: None,
            stress_level,
            hours_slept: Some(hours_slept),
            mood_comment: if comment.is_empty() {
                None
            } else {
                Some(comment.join(" "))
            },
        };
        match api::admin::create_survey_response(&self.ctx.api, &response).await {
            Ok(_) => println!("survey submitted, thank you"),
            Err(e) => print_error(&e),
        }
    }

    /// Shared delete dispatch: every delete action is `<command> <id>`.
    async fn delete_by_id(&self, args: &[&str], kind: &str) {
        let [id] = args else {
            println!("usage: delete-{kind} <id>");
            return;
        };
        let Some(id) = parse_i64(id, "id") else {
            return;
        };
        let api = &self.ctx.api;
        let result = match kind {
            "student" => api::admin::delete_student(api, id).await,
            "module" => api::admin::delete_module(api, id).await,
            "enrolment" => api::admin::delete_enrolment(api, id).await,
            "grade" => api::admin::delete_grade(api, id).await,
            "attendance" => api::admin::delete_attendance_record(api, id).await,
            "alert" => api::admin::delete_alert(api, id).await,
            "user" => api::admin::delete_user(api, id).await,
            "submission" => api::admin::delete_submission_record(api, id).await,
            "survey-response" => api::admin::delete_survey_response(api, id).await,
            _ => return,
        };
        match result {
            Ok(()) => println!("{kind} {id} deleted"),
            Err(e) => print_error(&e),
        }
    }
}

// --- Output helpers ---

fn print_error(err: &ApiError) {
    println!("error: {err}");
}

fn parse_i64(raw: &str, what: &str) -> Option<i64> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("not a valid {what}: {raw}");
            None
        }
    }
}

fn parse_i32(raw: &str, what: &str) -> Option<i32> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("not a valid {what}: {raw}");
            None
        }
    }
}

fn parse_f64(raw: &str, what: &str) -> Option<f64> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("not a valid {what}: {raw}");
            None
        }
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

fn fmt_opt_f64(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

fn print_help() {
    println!("session:");
    println!("  login <username> <password>          staff sign-in");
    println!("  login-student <username> <password>  student sign-in");
    println!("  register <username> <password>");
    println!("  register-student <student-number> <email> <password> <full name...>");
    println!("  logout    whoami");
    println!("navigation:");
    println!("  go <route> [id]    routes    refresh");
    println!("screen actions:");
    println!("  add-student <student-number> <email> <full name...>");
    println!("  add-module <code> <credit> <academic-year> <title...>");
    println!("  enrol <student-id> <module-id>");
    println!("  add-grade <student-id> <module-id> <grade> <assessment...>");
    println!("  add-attendance <student-id> <module-id> <week> <attended> <total>");
    println!("  add-alert <student-id> <module-id> <week> <reason...>");
    println!("  resolve <alert-id>    alerts-for <student-id>");
    println!("  add-user <username> <password> <role>");
    println!("  reset-password <user-id> <new-password>");
    println!("  submit-survey <stress 1-5> <hours-slept> [comment...]");
    println!("  delete-student|module|enrolment|grade|attendance|alert|user|submission|survey-response <id>");
    println!("other:");
    println!("  help    quit");
}

fn print_routes() {
    for route in routes::ROUTES {
        let access = match route.requires_role {
            Some(set) => set
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            None if route.requires_auth => "any signed-in".to_string(),
            None => "public".to_string(),
        };
        println!("{:<18} {:<22} {}", route.name, route.title, access);
    }
}

// --- Screen renderers ---

fn render_profile(student: &Student) {
    println!("{} ({})", student.full_name, student.student_number);
    println!("  email:  {}", student.email);
    println!("  course: {}", opt(&student.course_name));
    match student.year_of_study {
        Some(year) => println!("  year:   {year}"),
        None => println!("  year:   -"),
    }
    if !student.enrolments.is_empty() {
        println!("  enrolled: {}", student.enrolments.join(", "));
    }
}

fn render_students(rows: &[Student]) {
    for student in rows {
        println!(
            "{:>5}  {:<10} {:<26} {:<28} {}",
            student.id,
            student.student_number,
            student.full_name,
            student.email,
            opt(&student.course_name)
        );
    }
    println!("{} student(s)", rows.len());
}

fn render_modules(rows: &[Module]) {
    for module in rows {
        println!(
            "{:>5}  {:<10} {:<36} {:>3} cr  {}",
            module.id, module.module_code, module.module_title, module.credit, module.academic_year
        );
    }
    println!("{} module(s)", rows.len());
}

fn render_enrolments(rows: &[Enrolment]) {
    for enrolment in rows {
        println!(
            "{:>5}  {:<26} {:<36} {}",
            enrolment.id,
            opt(&enrolment.student_name),
            opt(&enrolment.module_title),
            enrolment.enrol_date
        );
    }
    println!("{} enrolment(s)", rows.len());
}

fn render_grades(rows: &[Grade]) {
    for grade in rows {
        println!(
            "{:>5}  {:<26} {:<30} {:<24} {:.1}",
            grade.id,
            opt(&grade.student_name),
            opt(&grade.module_title),
            grade.assessment_name,
            grade.grade
        );
    }
    println!("{} grade(s)", rows.len());
}

fn render_attendance(rows: &[AttendanceRecord]) {
    for record in rows {
        println!(
            "{:>5}  {:<26} {:<30} week {:<3} {}/{} ({:.0}%)",
            record.id,
            opt(&record.student_name),
            opt(&record.module_title),
            record.week_number,
            record.attended_sessions,
            record.total_sessions,
            record.attendance_rate * 100.0
        );
    }
    println!("{} attendance record(s)", rows.len());
}

fn render_submissions(rows: &[SubmissionRecord]) {
    for record in rows {
        let status = if !record.is_submitted {
            "missing"
        } else if record.is_late {
            "late"
        } else {
            "on time"
        };
        let due = record
            .due_date
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  {:<26} {:<24} due {:<17} {}",
            record.id,
            opt(&record.student_name),
            record.assessment_name,
            due,
            status
        );
    }
    println!("{} submission(s)", rows.len());
}

fn render_survey_responses(rows: &[SurveyResponse]) {
    for response in rows {
        let week = response
            .week_number
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>5}  week {:<3} stress {:<2} slept {:<5} {}",
            response.id,
            week,
            response.stress_level,
            fmt_opt_f64(response.hours_slept),
            opt(&response.mood_comment)
        );
    }
    println!("{} response(s)", rows.len());
}

fn render_alerts(rows: &[WellbeingAlert]) {
    for alert in rows {
        let state = if alert.resolved { "resolved" } else { "open" };
        println!(
            "{:>5}  {:<26} {:<30} {:<9} {}",
            alert.id,
            opt(&alert.student_name),
            opt(&alert.module_title),
            state,
            alert.reason
        );
    }
    println!("{} alert(s)", rows.len());
}

fn render_users(rows: &[UserAccount]) {
    for user in rows {
        let active = if user.is_active { "active" } else { "disabled" };
        println!(
            "{:>5}  {:<24} {:<20} {}",
            user.id, user.username, user.role, active
        );
    }
    println!("{} user(s)", rows.len());
}

fn render_trend(label: &str, trend: &TrendData) {
    println!("{label} by week");
    for (week, value) in trend.labels.iter().zip(&trend.data) {
        println!("  {week:<10} {value:.2}");
    }
}
