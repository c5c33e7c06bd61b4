use dpd_slice::prelude::*;
use dpd_slice::transform;

fn run(config: &Config) -> Result<(), dpd_slice::Error> {
    let box_ = SimulationBox::new(0.0, 20.0, 0.0, 10.0, 0.0, 10.0)?;
    let mut sampler = SpatialSampler::new(rand::thread_rng(), config)?;

    let compartment = Sphere::new(box_.midpoint(), 4.0)?;
    let bodies = sampler.pack_spheres_in_box(&box_, 8, 1.5, 1000, &[Body::Sphere(compartment)])?;

    let mut particles = Vec::new();
    for (i, body) in bodies.iter().enumerate() {
        particles.extend(sampler.points_in_sphere(body, 50, |c| ParticlePosition::new(c, i))?);
    }
    particles.extend(sampler.points_in_sphere(&compartment, 200, |c| {
        ParticlePosition::new(c, bodies.len())
    })?);

    transform::rotate_in_place(
        &mut particles,
        &Rotation::new(30.0, 15.0, 0.0),
        Some(&box_.midpoint()),
    );

    let in_box = particles
        .iter()
        .filter(|p| box_.contains(p.coord(), config))
        .count();
    println!("{} of {} particles inside the box", in_box, particles.len());
    let wireframe = box_.frame_points_for(config)?;

    let slicer = Slicer::new(config)?;
    for view in View::ALL {
        let projector = ViewProjector::new(&box_, view, 400, 400, config)?;
        let frame_pixels = projector.project_all(&wireframe);
        println!("{:?}: wireframe of {} pixels", view, frame_pixels.len());
        let in_frame = projector.mark_in_frame(&mut particles);
        let slices = slicer.create_slices(&mut particles, view, &box_);
        let filled = slices.iter().filter(|s| !s.is_empty()).count();
        println!(
            "{:?}: {} of {} particles in frame, {} of {} slices filled",
            view,
            in_frame,
            particles.len(),
            filled,
            slices.len()
        );
    }
    Ok(())
}

fn main() {
    let mut config = Config::new();
    config.number_of_slices = 8;
    if let Err(e) = run(&config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
