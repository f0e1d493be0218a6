use raycaster2d::geometry::angle_of;
use raycaster2d::{Point2, Raycaster, RaycasterConfig, Segment};

fn room(size: f32) -> Vec<Segment> {
    vec![
        Segment::white(Point2::new(0.0, 0.0), Point2::new(size, 0.0)),
        Segment::white(Point2::new(0.0, size), Point2::new(size, size)),
        Segment::white(Point2::new(0.0, 0.0), Point2::new(0.0, size)),
        Segment::white(Point2::new(size, 0.0), Point2::new(size, size)),
    ]
}

fn light_in(boundaries: &[Segment], source: Point2) -> Raycaster {
    let mut caster = Raycaster::new(source, RaycasterConfig::default());
    for boundary in boundaries {
        caster.register_boundary(boundary).unwrap();
    }
    caster
}

fn on_room_edge(p: Point2, size: f32) -> bool {
    let eps = 1e-3;
    let inside = p.x >= -eps && p.y >= -eps && p.x <= size + eps && p.y <= size + eps;
    let on_edge = p.x.abs() < eps
        || p.y.abs() < eps
        || (p.x - size).abs() < eps
        || (p.y - size).abs() < eps;
    inside && on_edge
}

#[test]
fn empty_room_is_fully_lit() {
    let walls = room(100.0);
    let source = Point2::new(50.0, 50.0);
    let mut caster = light_in(&walls, source);
    caster.update(&walls);

    assert_eq!(caster.rays().len(), 16);
    assert_eq!(caster.polygon().len(), 16);

    for ray in caster.rays() {
        assert_eq!(ray.start(), source);
        assert!(on_room_edge(ray.end(), 100.0), "ray end {:?}", ray.end());
    }

    // Consecutive fan edges turn strictly forward, so the fan never folds over itself.
    let angles: Vec<f32> = caster
        .polygon()
        .iter()
        .map(|t| angle_of(t.vertices[1] - source))
        .collect();
    assert!(angles.windows(2).all(|w| w[0] < w[1]));

    // Only the tiny corner notches between grazing probes are missing.
    let area: f32 = caster.polygon().iter().map(|t| t.area()).sum();
    assert!(area > 9990.0 && area <= 10000.1, "area {area}");
}

#[test]
fn obstacle_casts_a_shadow() {
    let mut walls = room(100.0);
    walls.push(Segment::white(Point2::new(70.0, 40.0), Point2::new(70.0, 60.0)));
    let source = Point2::new(50.0, 50.0);
    let mut caster = light_in(&walls, source);
    caster.update(&walls);

    let end_for = |goal: Point2| {
        caster
            .rays()
            .iter()
            .find(|r| r.goal() == goal)
            .map(|r| r.end())
            .unwrap()
    };
    let grazing_inside = end_for(Point2::new(70.0, 41.0));
    assert!((grazing_inside - Point2::new(70.0, 41.0)).length() < 1e-3);
    let grazing_outside = end_for(Point2::new(70.0, 39.0));
    assert!((grazing_outside - Point2::new(100.0, 22.5)).length() < 1e-3);

    // No lit point lies behind the obstacle.
    for ray in caster.rays() {
        let end = ray.end();
        if end.x > 70.0 + 1e-3 {
            let crossing_y = 50.0 + (end.y - 50.0) * (20.0 / (end.x - 50.0));
            assert!(
                !(crossing_y > 40.0 + 1e-3 && crossing_y < 60.0 - 1e-3),
                "ray end {end:?} is in shadow"
            );
        }
    }
}

#[test]
fn repeated_update_is_idempotent() {
    let mut walls = room(300.0);
    walls.push(Segment::white(Point2::new(120.0, 80.0), Point2::new(200.0, 140.0)));
    walls.push(Segment::white(Point2::new(40.0, 220.0), Point2::new(90.0, 190.0)));
    let mut caster = light_in(&walls, Point2::new(150.0, 170.0));

    caster.update(&walls);
    let rays = caster.rays().to_vec();
    let polygon = caster.polygon().to_vec();

    caster.update(&walls);
    assert_eq!(caster.rays(), rays.as_slice());
    assert_eq!(caster.polygon(), polygon.as_slice());
}

#[test]
fn moving_the_light_takes_effect_on_update() {
    let walls = room(100.0);
    let mut caster = light_in(&walls, Point2::new(50.0, 50.0));
    caster.update(&walls);
    let before = caster.polygon().to_vec();

    caster.set_source(Point2::new(20.0, 80.0));
    assert_eq!(caster.polygon(), before.as_slice());

    caster.update(&walls);
    assert!(caster
        .polygon()
        .iter()
        .all(|t| t.vertices[0] == Point2::new(20.0, 80.0)));
    for ray in caster.rays() {
        assert!(on_room_edge(ray.end(), 100.0));
    }
}

#[test]
fn registering_n_boundaries_gives_4n_rays() {
    let walls = room(50.0);
    let mut caster = Raycaster::new(Point2::new(25.0, 25.0), RaycasterConfig::default());
    for (i, wall) in walls.iter().chain(walls.iter()).enumerate() {
        caster.register_boundary(wall).unwrap();
        assert_eq!(caster.rays().len(), 4 * (i + 1));
    }
}
