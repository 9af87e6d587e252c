// Host-side tests for the scroll-driven narrative: registry, sampler,
// resolver, driver and the context that ties them together.

use pitchutcha_core::*;
use std::cell::RefCell;
use std::rc::Rc;

const STORY: [&str; 4] = ["humanity", "science", "technology", "future"];

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_orientation(a: Orientation, b: Orientation) -> bool {
    approx(a.rotation_y, b.rotation_y)
        && approx(a.rotation_x, b.rotation_x)
        && approx(a.camera_z, b.camera_z)
}

// Four chapters at normalized boundaries [0.0, 0.25, 0.5, 0.75].
fn story_registry() -> ChapterRegistry {
    let table = OrientationTable::pitchutcha();
    let chapters = STORY
        .iter()
        .enumerate()
        .map(|(i, id)| Chapter::new(*id, i as f32 * 250.0, table.target_or_default(id)))
        .collect();
    ChapterRegistry::from_chapters(chapters).unwrap()
}

fn story_driver() -> (NarrativeDriver, OrientationReader) {
    let table = OrientationTable::pitchutcha();
    let (writer, reader) = orientation_channel(table.default_orientation());
    let config = NarrativeConfig::default();
    let driver =
        NarrativeDriver::from_registry(&story_registry(), 1000.0, writer, &config).unwrap();
    (driver, reader)
}

fn story_anchors() -> Vec<ChapterAnchor> {
    STORY
        .iter()
        .enumerate()
        .map(|(i, id)| ChapterAnchor::new(format!("chapter-{}", id), i as f32 * 250.0))
        .collect()
}

fn target(id: &str) -> Orientation {
    OrientationTable::pitchutcha().target(id).unwrap()
}

#[test]
fn boundary_scenario_resolves_expected_chapters() {
    let (driver, _) = story_driver();
    assert_eq!(driver.resolver().boundaries(), &[0.0, 0.25, 0.5, 0.75]);
    let id_at = |p: f32| driver.chapter(driver.resolve(p).index).unwrap().id.clone();
    assert_eq!(id_at(0.6), "technology");
    assert_eq!(id_at(0.75), "future");
    assert_eq!(id_at(-0.1), "humanity");
    assert_eq!(id_at(1.5), "future");
}

#[test]
fn zero_anchor_scenario_uses_sentinel_and_idles() {
    let mut ctx = NarrativeContext::build(
        &[],
        &OrientationTable::pitchutcha(),
        1000.0,
        NarrativeConfig::default(),
    );
    assert!(!ctx.is_enabled());
    for p in [-1.0, 0.0, 0.3, 1.0, f32::NAN] {
        assert!(ctx.chapter_at(p).is_sentinel());
    }
    assert_eq!(ctx.on_scroll(ScrollMetrics::new(400.0, 0.0, 1000.0)), None);
    assert!(ctx.on_chapter_change(|_| {}).is_noop());

    let (_drag, flag) = drag_channel();
    let mut render_loop = ctx.render_loop(flag);
    let first = render_loop.frame();
    let second = render_loop.frame();
    assert!(second.idle_angle > first.idle_angle);
    assert_eq!(second.orientation, Orientation::default());
}

#[test]
fn anchors_without_prefix_only_disable_the_narrative() {
    let anchors = vec![
        ChapterAnchor::new("intro", 0.0),
        ChapterAnchor::new("about", 400.0),
    ];
    let ctx = NarrativeContext::build(
        &anchors,
        &OrientationTable::pitchutcha(),
        1000.0,
        NarrativeConfig::default(),
    );
    assert!(!ctx.is_enabled());
}

#[test]
fn rapid_scroll_lands_on_final_chapter() {
    let (mut driver, reader) = story_driver();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let _sub = driver.on_chapter_change(move |c| log.borrow_mut().push((c.from, c.to)));

    driver.apply(0.1);
    let active = driver.apply(0.9);
    assert_eq!(active.index, 3);
    assert_eq!(*seen.borrow(), vec![(None, 0), (Some(0), 3)]);
    assert_eq!(reader.get(), driver.orientation_at(0.9));
    assert!(approx_orientation(reader.get(), target("future")));
}

#[test]
fn same_chapter_progress_stays_in_chapter() {
    let (driver, _) = story_driver();
    for p in [0.5, 0.55, 0.6, 0.7, 0.749] {
        assert_eq!(driver.resolve(p).index, 2, "p = {}", p);
    }
}

#[test]
fn active_index_is_monotonic_in_progress() {
    let (driver, _) = story_driver();
    let mut last = 0;
    for step in 0..=200 {
        let p = step as f32 / 200.0;
        let index = driver.resolve(p).index;
        assert!(index >= last, "index went back at p = {}", p);
        last = index;
    }
    assert_eq!(last, 3);
}

#[test]
fn resolving_is_idempotent() {
    let (mut driver, reader) = story_driver();
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    let _sub = driver.on_chapter_change(move |_| *c.borrow_mut() += 1);

    assert_eq!(driver.resolve(0.42), driver.resolve(0.42));
    driver.apply(0.42);
    let first = reader.get();
    driver.apply(0.42);
    assert_eq!(reader.get(), first);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn scrubbing_backwards_replays_the_same_path() {
    let (mut driver, reader) = story_driver();
    let steps: Vec<f32> = (0..=40).map(|i| i as f32 / 40.0).collect();
    let forward: Vec<Orientation> = steps
        .iter()
        .map(|&p| {
            driver.apply(p);
            reader.get()
        })
        .collect();
    for (i, &p) in steps.iter().enumerate().rev() {
        driver.apply(p);
        assert_eq!(reader.get(), forward[i], "p = {}", p);
    }
}

#[test]
fn chapter_start_continues_from_previous_target() {
    let (driver, _) = story_driver();
    assert_eq!(driver.orientation_at(0.0), target("humanity"));
    assert_eq!(driver.orientation_at(0.5), target("science"));
    // past the transition window the chapter holds its own target
    assert!(approx_orientation(driver.orientation_at(0.72), target("technology")));
    // midway through the window it sits strictly between the two targets
    let mid = driver.orientation_at(0.575);
    assert!(mid.camera_z < target("science").camera_z);
    assert!(mid.camera_z > target("technology").camera_z);
}

#[test]
fn driver_rejects_mismatched_boundaries() {
    let (writer, _) = orientation_channel(Orientation::default());
    let resolver = ChapterResolver::from_boundaries(vec![0.0, 0.5]).unwrap();
    let chapters: Vec<Chapter> = story_registry().iter().cloned().collect();
    let err = NarrativeDriver::new(resolver, chapters, writer, &NarrativeConfig::default())
        .err()
        .unwrap();
    assert_eq!(
        err,
        BoundaryError::CountMismatch {
            boundaries: 2,
            chapters: 4
        }
    );
}

#[test]
fn registry_filters_and_sorts_anchors() {
    let anchors = vec![
        ChapterAnchor::new("chapter-future", 750.0),
        ChapterAnchor::new("chapter-humanity", 0.0),
        ChapterAnchor::new("intro", 10.0),
        ChapterAnchor::new("chapter-", 5.0),
        ChapterAnchor::new("chapter-science", f32::NAN),
        ChapterAnchor::new("chapter-unknown", 300.0),
    ];
    let table = OrientationTable::pitchutcha();
    let registry =
        ChapterRegistry::from_anchors(&anchors, &table, &NarrativeConfig::default()).unwrap();
    let ids: Vec<&str> = registry.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["humanity", "unknown", "future"]);
    assert_eq!(registry.find("unknown").unwrap().1.orientation, table.default_orientation());
    assert_eq!(registry.find("future").unwrap().0, 2);
    assert_eq!(registry.normalized_boundaries(1000.0), vec![0.0, 0.3, 0.75]);
    assert_eq!(registry.normalized_boundaries(0.0), vec![0.0, 1.0, 1.0]);
    assert_eq!(registry.normalized_boundaries(f32::NAN), vec![0.0, 1.0, 1.0]);
}

#[test]
fn registry_keeps_document_order_on_equal_offsets() {
    let table = OrientationTable::pitchutcha();
    let anchors = vec![
        ChapterAnchor::new("chapter-science", 100.0),
        ChapterAnchor::new("chapter-humanity", 100.0),
    ];
    let registry =
        ChapterRegistry::from_anchors(&anchors, &table, &NarrativeConfig::default()).unwrap();
    let ids: Vec<&str> = registry.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["science", "humanity"]);
    assert!(ChapterRegistry::from_chapters(Vec::new()).is_none());
}

#[test]
fn simultaneous_boundaries_snap_to_last_chapter() {
    let resolver = ChapterResolver::from_boundaries(vec![0.0, 0.5, 0.5]).unwrap();
    assert_eq!(resolver.resolve(0.5).index, 2);
    assert_eq!(resolver.resolve(0.49).index, 0);
}

#[test]
fn resolver_reports_local_progress() {
    let resolver = ChapterResolver::from_boundaries(vec![0.0, 0.25, 0.5, 0.75]).unwrap();
    let active = resolver.resolve(0.6);
    assert_eq!(active.index, 2);
    assert!(approx(active.local_progress, 0.4));
    assert!(approx(resolver.resolve(0.875).local_progress, 0.5));

    // progress before the first boundary falls back to the first chapter
    let late = ChapterResolver::from_boundaries(vec![0.2, 0.6]).unwrap();
    assert_eq!(
        late.resolve(0.1),
        ActiveChapter {
            index: 0,
            local_progress: 0.0
        }
    );
}

#[test]
fn boundary_index_validates_input() {
    assert_eq!(
        BoundaryIndex::new(vec![0.0, 0.5, 0.2]),
        Err(BoundaryError::Decreasing {
            index: 2,
            value: 0.2,
            previous: 0.5
        })
    );
    assert_eq!(
        BoundaryIndex::new(vec![0.0, f32::INFINITY]),
        Err(BoundaryError::NotFinite { index: 1 })
    );
    let index = BoundaryIndex::new(vec![0.0, 0.5, 0.5, 0.8]).unwrap();
    assert_eq!(index.locate(0.5), Some(2));
    assert_eq!(index.locate(-0.1), None);
    assert_eq!(index.locate(2.0), Some(3));
    assert_eq!(BoundaryIndex::default().locate(0.3), None);
}

#[test]
fn sampler_clamps_and_handles_zero_height() {
    assert!(approx(scroll_progress(&ScrollMetrics::new(500.0, 100.0, 800.0)), 0.5));
    assert_eq!(scroll_progress(&ScrollMetrics::new(50.0, 100.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(5000.0, 100.0, 800.0)), 1.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(500.0, 100.0, 0.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(500.0, 100.0, f32::NAN)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(f32::NAN, 0.0, 800.0)), 0.0);
    assert_eq!(clamp_progress(-3.0), 0.0);
    assert!(approx(sample(&ScrollMetrics::new(300.0, 100.0, 400.0)), 0.5));
}

#[test]
fn context_applies_only_latest_scroll_sample() {
    let table = OrientationTable::pitchutcha();
    let mut ctx =
        NarrativeContext::build(&story_anchors(), &table, 1000.0, NarrativeConfig::default());
    assert!(ctx.is_enabled());
    let throttle = ctx.throttle();
    throttle.push(ScrollMetrics::new(100.0, 0.0, 1000.0));
    throttle.push(ScrollMetrics::new(900.0, 0.0, 1000.0));
    assert_eq!(ctx.tick().map(|a| a.index), Some(3));
    assert_eq!(ctx.tick(), None);
    assert_eq!(ctx.chapter_at(0.9).id, "future");
}

#[test]
fn zero_height_container_rests_on_first_chapter() {
    let table = OrientationTable::pitchutcha();
    let mut ctx =
        NarrativeContext::build(&story_anchors(), &table, 0.0, NarrativeConfig::default());
    let active = ctx.on_scroll(ScrollMetrics::new(0.0, 0.0, 0.0));
    assert_eq!(active.map(|a| a.index), Some(0));
    assert_eq!(ctx.chapter_at(0.0).id, "humanity");
    assert!(approx_orientation(ctx.reader().get(), target("humanity")));
}

fn scaled_anchors(scale: f32) -> Vec<ChapterAnchor> {
    story_anchors()
        .into_iter()
        .map(|a| ChapterAnchor::new(a.element_id, a.offset * scale))
        .collect()
}

#[test]
fn context_relayouts_from_remeasured_anchors() {
    let table = OrientationTable::pitchutcha();
    let mut ctx =
        NarrativeContext::build(&story_anchors(), &table, 1000.0, NarrativeConfig::default());
    assert_eq!(ctx.on_scroll(ScrollMetrics::new(450.0, 0.0, 1000.0)).map(|a| a.index), Some(1));

    // the page reflows to twice the height and every anchor moves with it
    let layouts = ctx.layouts();
    layouts.push(ChapterLayout::new(scaled_anchors(2.0), 2000.0));
    ctx.throttle().push(ScrollMetrics::new(900.0, 0.0, 2000.0));
    assert_eq!(ctx.tick().map(|a| a.index), Some(1));
    assert_eq!(ctx.chapter_at(0.45).id, "science");

    // a taller container alone does not move the boundaries
    assert_eq!(ctx.on_scroll(ScrollMetrics::new(900.0, 0.0, 4000.0)).map(|a| a.index), Some(0));
}

#[test]
fn relayout_recovers_from_zero_height_and_ignores_empty_layouts() {
    let table = OrientationTable::pitchutcha();
    let mut ctx =
        NarrativeContext::build(&story_anchors(), &table, 0.0, NarrativeConfig::default());
    ctx.relayout(&ChapterLayout::new(story_anchors(), 1000.0));
    assert_eq!(ctx.on_scroll(ScrollMetrics::new(600.0, 0.0, 1000.0)).map(|a| a.index), Some(2));

    ctx.relayout(&ChapterLayout::default());
    assert_eq!(ctx.chapter_at(0.6).id, "technology");
}

#[test]
fn context_publishes_chapter_changes() {
    let table = OrientationTable::pitchutcha();
    let mut ctx =
        NarrativeContext::build(&story_anchors(), &table, 1000.0, NarrativeConfig::default());
    let ids = Rc::new(RefCell::new(Vec::new()));
    let log = ids.clone();
    let sub = ctx.on_chapter_change(move |c| log.borrow_mut().push(c.id.clone()));
    ctx.on_scroll(ScrollMetrics::new(0.0, 0.0, 1000.0));
    ctx.on_scroll(ScrollMetrics::new(300.0, 0.0, 1000.0));
    sub.dispose();
    ctx.on_scroll(ScrollMetrics::new(600.0, 0.0, 1000.0));
    assert_eq!(*ids.borrow(), vec!["humanity".to_string(), "science".to_string()]);
}

#[test]
fn easing_curves_fix_endpoints_and_rise() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::CubicInOut] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert!(approx(easing.apply(1.0), 1.0));
        assert_eq!(easing.apply(f32::NAN), 0.0);
        assert!(approx(easing.apply(2.0), 1.0));
        let mut last = 0.0;
        for i in 0..=50 {
            let v = easing.apply(i as f32 / 50.0);
            assert!(v >= last, "{:?} not monotone", easing);
            last = v;
        }
    }
    assert!(approx(Easing::SmoothStep.apply(0.5), 0.5));
}

#[test]
fn orientation_stays_finite_and_bounded() {
    let limits = OrientationLimits::default();
    let broken = Orientation::new(f32::NAN, 0.4, f32::INFINITY);
    let fixed = broken.constrained(&limits);
    assert!(fixed.is_finite());
    assert_eq!(fixed.rotation_y, 0.0);
    assert_eq!(fixed.rotation_x, 0.4);
    assert_eq!(fixed.camera_z, Orientation::default().camera_z);

    assert_eq!(Orientation::new(0.0, 0.0, 20.0).constrained(&limits).camera_z, limits.camera_max);
    let inverted = OrientationLimits {
        camera_min: 5.0,
        camera_max: 2.0,
    };
    assert_eq!(inverted.clamp_camera(1.0), 2.0);

    let a = Orientation::new(0.0, 0.0, 2.0);
    let b = Orientation::new(1.0, 1.0, 4.0);
    assert_eq!(Orientation::lerp(a, b, 1.5), Orientation::lerp(a, b, 1.0));
    assert_eq!(Orientation::lerp(a, b, f32::NAN), a);
    let yaw = Orientation::new(-std::f32::consts::FRAC_PI_2, 0.0, 3.0).wrapped_yaw();
    assert!(approx(yaw, 3.0 * std::f32::consts::FRAC_PI_2));
}

#[test]
fn orientation_table_has_every_story_chapter() {
    let table = OrientationTable::pitchutcha();
    assert_eq!(table.len(), STORY.len());
    let limits = OrientationLimits::default();
    for id in STORY {
        let t = table.target(id).unwrap();
        assert_eq!(t.constrained(&limits), t, "{} outside camera limits", id);
    }
    assert_eq!(table.target_or_default("missing"), table.default_orientation());
}
