//! Randomized invariant checks over seeded inputs.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use exam_schedule::availability::{CommittedSchedule, ScheduleBook};
use exam_schedule::models::{ExamSchedule, Room, Student, Teacher, TimeWindow};
use exam_schedule::scheduler::{ExamTiming, SlotAssembler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: u64 = 40;

struct Input {
    students: Vec<Student>,
    rooms: Vec<Room>,
    proctors: Vec<Teacher>,
    graders: Vec<Teacher>,
    timing: ExamTiming,
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn random_input(rng: &mut StdRng) -> Input {
    let students = (0..rng.random_range(1..=120))
        .map(|i| Student::new(format!("S{i:03}")))
        .collect();
    let rooms = (0..rng.random_range(1..=5))
        .map(|i| Room::new(format!("R{i}"), rng.random_range(1..=30)))
        .collect();
    let proctors = (0..rng.random_range(1..=6))
        .map(|i| Teacher::new(format!("T{i}")))
        .collect();
    let graders = (0..rng.random_range(1..=4))
        .map(|i| Teacher::new(format!("G{i}")))
        .collect();

    let start_hour = rng.random_range(7..=9);
    let span_hours = rng.random_range(3..=8);
    let timing = ExamTiming::new(
        monday(),
        NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(start_hour + span_hours, 0, 0).unwrap(),
        rng.random_range(30..=120),
        rng.random_range(0..=30),
    );

    Input {
        students,
        rooms,
        proctors,
        graders,
        timing,
    }
}

fn random_book(rng: &mut StdRng, input: &Input) -> ScheduleBook {
    let mut book = ScheduleBook::new();
    let day_start: NaiveDateTime = monday().and_time(input.timing.daily_start);
    for room in &input.rooms {
        if rng.random_bool(0.5) {
            let offset = Duration::minutes(rng.random_range(0..=240));
            let start = day_start + offset;
            let window = TimeWindow::new(start, start + Duration::minutes(90));
            book.reserve_room(room.id.clone(), window);
        }
    }
    for teacher in &input.proctors {
        if rng.random_bool(0.3) {
            let offset = Duration::minutes(rng.random_range(0..=240));
            let start = day_start + offset;
            let window = TimeWindow::new(start, start + Duration::minutes(60));
            book.commit_teacher(teacher.id.clone(), window);
        }
    }
    book
}

fn room_windows(schedule: &ExamSchedule) -> HashMap<String, Vec<TimeWindow>> {
    let mut by_room: HashMap<String, Vec<TimeWindow>> = HashMap::new();
    for slot in &schedule.slots {
        for room in &slot.rooms {
            by_room.entry(room.room_id.clone()).or_default().push(slot.window());
        }
    }
    by_room
}

fn proctor_windows(schedule: &ExamSchedule) -> HashMap<String, Vec<TimeWindow>> {
    let mut by_teacher: HashMap<String, Vec<TimeWindow>> = HashMap::new();
    for slot in &schedule.slots {
        for proctor in &slot.proctors {
            by_teacher
                .entry(proctor.teacher_id.clone())
                .or_default()
                .push(slot.window());
        }
    }
    by_teacher
}

fn assert_pairwise_disjoint(label: &str, windows: &[TimeWindow]) {
    for (i, a) in windows.iter().enumerate() {
        for b in &windows[i + 1..] {
            assert!(!a.overlaps(b), "{label} double-booked: {a:?} / {b:?}");
        }
    }
}

#[test]
fn test_every_student_placed_exactly_once() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let input = random_input(&mut rng);
        let schedule = SlotAssembler::unconstrained().schedule(
            &input.students,
            &input.rooms,
            &input.proctors,
            &input.graders,
            &input.timing,
        );

        assert!(schedule.is_complete(), "seed {seed} left students unplaced");
        let mut seen = HashSet::new();
        for room in schedule.room_assignments() {
            for student in &room.students {
                assert!(
                    seen.insert(student.code.clone()),
                    "seed {seed}: {} placed twice",
                    student.code
                );
            }
        }
        assert_eq!(seen.len(), input.students.len(), "seed {seed}");
    }
}

#[test]
fn test_rooms_within_capacity_and_in_day() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let input = random_input(&mut rng);
        let schedule = SlotAssembler::unconstrained().schedule(
            &input.students,
            &input.rooms,
            &input.proctors,
            &input.graders,
            &input.timing,
        );

        for slot in &schedule.slots {
            assert!(slot.start_time >= input.timing.daily_start, "seed {seed}");
            assert!(slot.end_time <= input.timing.daily_end, "seed {seed}");
            assert!(slot.date >= monday(), "seed {seed}");
            for room in &slot.rooms {
                assert!(room.within_capacity(), "seed {seed}: room {} over capacity", room.room_id);
                assert!(room.student_count() > 0, "seed {seed}: empty room assignment");
            }
        }
    }
}

#[test]
fn test_no_double_booking_against_commitments() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let input = random_input(&mut rng);
        let book = random_book(&mut rng, &input);
        let schedule = SlotAssembler::new(&book).schedule(
            &input.students,
            &input.rooms,
            &input.proctors,
            &input.graders,
            &input.timing,
        );

        for (room_id, mut windows) in room_windows(&schedule) {
            let reserved = book.room_reservations(&room_id);
            for w in &windows {
                assert!(
                    !w.overlaps_any(&reserved),
                    "seed {seed}: room {room_id} overlaps a reservation"
                );
            }
            windows.extend(reserved);
            assert_pairwise_disjoint(&room_id, &windows);
        }
        for (teacher_id, mut windows) in proctor_windows(&schedule) {
            let committed = book.teacher_commitments(&teacher_id);
            for w in &windows {
                assert!(
                    !w.overlaps_any(&committed),
                    "seed {seed}: {teacher_id} overlaps a commitment"
                );
            }
            windows.extend(committed);
            assert_pairwise_disjoint(&teacher_id, &windows);
        }
    }
}

#[test]
fn test_proctors_distinct_within_slot() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let input = random_input(&mut rng);
        let schedule = SlotAssembler::unconstrained().schedule(
            &input.students,
            &input.rooms,
            &input.proctors,
            &input.graders,
            &input.timing,
        );

        for slot in &schedule.slots {
            let ids: HashSet<_> = slot.proctors.iter().map(|p| p.teacher_id.as_str()).collect();
            assert_eq!(ids.len(), slot.proctors.len(), "seed {seed}");
            assert!(slot.proctors.len() <= slot.rooms.len(), "seed {seed}");
        }
    }
}

#[test]
fn test_grader_rotation_is_fair() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let input = random_input(&mut rng);
        let schedule = SlotAssembler::unconstrained().schedule(
            &input.students,
            &input.rooms,
            &input.proctors,
            &input.graders,
            &input.timing,
        );

        let rooms_total = schedule.room_assignment_count();
        let pool = input.graders.len();
        let mut counts: HashMap<&str, usize> =
            input.graders.iter().map(|g| (g.id.as_str(), 0)).collect();
        for slot in &schedule.slots {
            assert_eq!(slot.graders.len(), slot.rooms.len(), "seed {seed}");
            for grader in &slot.graders {
                *counts.entry(grader.teacher_id.as_str()).or_insert(0) += 1;
            }
        }

        let floor = rooms_total / pool;
        let ceil = rooms_total.div_ceil(pool);
        for (id, count) in counts {
            assert!(
                (floor..=ceil).contains(&count),
                "seed {seed}: grader {id} got {count}, expected {floor}..={ceil}"
            );
        }
    }
}
