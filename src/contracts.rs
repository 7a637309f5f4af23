use crate::motion::FabMotion;

pub trait WithId: Sized {
    fn id(&self) -> &str;
    fn id_mut(&mut self) -> &mut String;

    fn with_id(mut self, id: impl Into<String>) -> Self {
        *self.id_mut() = id.into();
        self
    }
}

pub trait MotionAware: Sized {
    fn motion(self, value: FabMotion) -> Self;
}

pub trait Expandable: Sized {
    fn expanded(self, value: bool) -> Self;
}

#[macro_export]
macro_rules! impl_expandable {
    ($type:ty) => {
        impl $crate::contracts::Expandable for $type {
            fn expanded(self, value: bool) -> Self {
                <$type>::expanded(self, value)
            }
        }
    };
}
