mod test_area_basic;
mod test_sampler_basic;
