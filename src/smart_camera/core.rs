use crate::device_camera::interface::DeviceCameraEvent;
use crate::image_classifier::interface::Classification;
use image::DynamicImage;

pub const CAMERA_ALERT_MESSAGE: &str = "Camera input is broken.";
pub const MODEL_ALERT_MESSAGE: &str = "Problem with the classification model.";

#[derive(Default, Clone)]
pub struct Model {
    pub camera: CameraStatus,
    pub classifier: ClassifierStatus,
    pub preview: Option<DynamicImage>,
    pub recognition: Option<Classification>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CameraStatus {
    #[default]
    Waiting,
    Streaming,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ClassifierStatus {
    #[default]
    Loading,
    Ready,
    Disabled,
}

impl Model {
    pub fn to_display_string(&self) -> String {
        format!(
            "Model {{ camera: {:?}, classifier: {:?}, preview: {}, recognition: {:?} }}",
            self.camera,
            self.classifier,
            match &self.preview {
                Some(frame) => format!("Some({}x{})", frame.width(), frame.height()),
                None => "None".to_string(),
            },
            self.recognition,
        )
    }
}

#[derive(Debug)]
pub enum Event {
    CameraEvent(DeviceCameraEvent),
    CameraStartDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    ModelLoadDone(Result<(), Box<dyn std::error::Error + Send + Sync>>),
    FrameCaptured(DynamicImage),
    FrameClassifyDone(Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>),
}

impl Event {
    pub fn to_display_string(&self) -> String {
        match self {
            Event::FrameCaptured(frame) => {
                format!("FrameCaptured({}x{})", frame.width(), frame.height())
            }
            event => format!("{:?}", event),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Effect {
    SubscribeCamera,
    SubscribeFrames,
    StartCamera,
    LoadModel,
    ClassifyFrame { frame: DynamicImage },
    ShowAlert { message: String },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::ClassifyFrame { frame } => {
                format!("ClassifyFrame({}x{})", frame.width(), frame.height())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![Effect::SubscribeCamera, Effect::LoadModel],
    )
}

pub fn transition(mut model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::CameraEvent(DeviceCameraEvent::Connected) => {
            if model.camera == CameraStatus::Waiting {
                (model, vec![Effect::StartCamera])
            } else {
                (model, vec![])
            }
        }
        Event::CameraEvent(DeviceCameraEvent::Disconnected) => match model.camera {
            CameraStatus::Waiting => {
                model.camera = CameraStatus::Failed;
                (
                    model,
                    vec![Effect::ShowAlert {
                        message: CAMERA_ALERT_MESSAGE.to_string(),
                    }],
                )
            }
            // Loss after streaming began freezes the preview on the last
            // frame; the setup alert has no business firing here.
            CameraStatus::Streaming => {
                model.camera = CameraStatus::Failed;
                (model, vec![])
            }
            CameraStatus::Failed => (model, vec![]),
        },
        Event::CameraStartDone(Ok(())) => {
            if model.camera == CameraStatus::Waiting {
                model.camera = CameraStatus::Streaming;
                (model, vec![Effect::SubscribeFrames])
            } else {
                (model, vec![])
            }
        }
        Event::CameraStartDone(Err(_)) => {
            if model.camera == CameraStatus::Waiting {
                model.camera = CameraStatus::Failed;
                (
                    model,
                    vec![Effect::ShowAlert {
                        message: CAMERA_ALERT_MESSAGE.to_string(),
                    }],
                )
            } else {
                (model, vec![])
            }
        }
        Event::ModelLoadDone(Ok(())) => {
            if model.classifier == ClassifierStatus::Loading {
                model.classifier = ClassifierStatus::Ready;
            }
            (model, vec![])
        }
        Event::ModelLoadDone(Err(_)) => {
            if model.classifier == ClassifierStatus::Loading {
                model.classifier = ClassifierStatus::Disabled;
                (
                    model,
                    vec![Effect::ShowAlert {
                        message: MODEL_ALERT_MESSAGE.to_string(),
                    }],
                )
            } else {
                (model, vec![])
            }
        }
        Event::FrameCaptured(frame) => {
            if model.camera != CameraStatus::Streaming {
                return (model, vec![]);
            }

            let effects = if model.classifier == ClassifierStatus::Ready {
                vec![Effect::ClassifyFrame {
                    frame: frame.clone(),
                }]
            } else {
                vec![]
            };

            model.preview = Some(frame);
            (model, effects)
        }
        Event::FrameClassifyDone(Ok(classifications)) => {
            // An empty result keeps whatever was on screen before.
            if let Some(top) = classifications.into_iter().next() {
                model.recognition = Some(top);
            }
            (model, vec![])
        }
        Event::FrameClassifyDone(Err(_)) => (model, vec![]),
    }
}
